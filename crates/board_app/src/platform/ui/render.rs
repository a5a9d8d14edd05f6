use board_core::{BoardPhase, BoardViewModel, CardView, ColumnView};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use super::layout;

/// Draws one frame from the view-model snapshot.
pub fn render(frame: &mut Frame, view: &BoardViewModel) {
    let (header_area, body_area) = layout::split_frame(frame.area());
    frame.render_widget(header(view), header_area);

    match &view.phase {
        BoardPhase::Idle | BoardPhase::Loading => {
            frame.render_widget(notice("Loading tickets...", Color::Yellow), body_area);
        }
        BoardPhase::Failed { message } => {
            frame.render_widget(notice(&format!("Error: {message}"), Color::Red), body_area);
        }
        BoardPhase::Ready => {
            if view.columns.is_empty() {
                frame.render_widget(notice("No tickets.", Color::DarkGray), body_area);
                return;
            }
            let rects = layout::column_rects(body_area, view.columns.len());
            for (column, rect) in view.columns.iter().zip(rects) {
                frame.render_widget(column_list(column), rect);
            }
        }
    }
}

fn header(view: &BoardViewModel) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled("Kanban Board", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   Group by: "),
        Span::styled(view.group_by.to_string(), selector_style()),
        Span::raw("   Sort by: "),
        Span::styled(view.sort_by.to_string(), selector_style()),
        Span::styled(
            "   g: group  s: sort  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM))
}

fn selector_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn notice(text: &str, color: Color) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
}

fn column_list(column: &ColumnView) -> List<'static> {
    let items: Vec<ListItem> = column.cards.iter().map(card_item).collect();
    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} ({})", column.key, column.cards.len())),
    )
}

fn card_item(card: &CardView) -> ListItem<'static> {
    let lines = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} · {}", card.status, card.assignee)),
        Line::from(Span::styled(
            card.priority_label.clone(),
            Style::default().fg(Color::Magenta),
        )),
        Line::default(),
    ];
    ListItem::new(lines)
}
