use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed-height header strip above the board body.
pub fn split_frame(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Equal-width column rectangles spanning the body.
pub fn column_rects(area: Rect, count: usize) -> Vec<Rect> {
    let count = count.max(1);
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}
