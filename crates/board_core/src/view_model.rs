use crate::grouping::{group_and_sort, UNSPECIFIED_GROUP_KEY};
use crate::ticket::priority_label;
use crate::{BoardPhase, GroupMode, SortMode, Ticket};

/// Immutable render snapshot; everything the view needs, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardViewModel {
    pub phase: BoardPhase,
    pub group_by: GroupMode,
    pub sort_by: SortMode,
    pub columns: Vec<ColumnView>,
    pub ticket_count: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub key: String,
    pub cards: Vec<CardView>,
}

/// One rendered ticket, with every display string already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub status: String,
    pub assignee: String,
    pub priority_label: String,
}

impl BoardViewModel {
    pub(crate) fn build(
        phase: &BoardPhase,
        tickets: &[Ticket],
        group_by: GroupMode,
        sort_by: SortMode,
        dirty: bool,
    ) -> Self {
        let columns = if phase == &BoardPhase::Ready {
            group_and_sort(tickets, group_by, sort_by)
                .groups
                .into_iter()
                .map(|group| ColumnView {
                    key: group.key,
                    cards: group.tickets.iter().map(CardView::from_ticket).collect(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            phase: phase.clone(),
            group_by,
            sort_by,
            columns,
            ticket_count: tickets.len(),
            dirty,
        }
    }
}

impl CardView {
    fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            status: display_or_unspecified(ticket.status.as_deref()),
            assignee: display_or_unspecified(ticket.user.as_deref()),
            priority_label: priority_label(ticket.priority),
        }
    }
}

fn display_or_unspecified(value: Option<&str>) -> String {
    value.unwrap_or(UNSPECIFIED_GROUP_KEY).to_string()
}
