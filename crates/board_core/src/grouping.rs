use std::cmp::Reverse;
use std::collections::HashMap;

use crate::{GroupMode, SortMode, Ticket};

/// Column key for tickets that lack the attribute selected by the group mode.
pub const UNSPECIFIED_GROUP_KEY: &str = "(unspecified)";

/// One board column: a group key and its tickets, sorted per the sort mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketGroup {
    pub key: String,
    pub tickets: Vec<Ticket>,
}

/// Tickets partitioned into columns, in first-seen key order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupedBoard {
    pub groups: Vec<TicketGroup>,
}

/// Partitions tickets by the group-mode attribute and sorts each group.
///
/// Group order is the order in which distinct keys are first encountered in
/// the input; no group is ever empty. Both sorts are stable, so tickets with
/// equal sort keys keep their relative input order.
pub fn group_and_sort(tickets: &[Ticket], group_by: GroupMode, sort_by: SortMode) -> GroupedBoard {
    let mut groups: Vec<TicketGroup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for ticket in tickets {
        let key = group_key(ticket, group_by);
        let slot = *slots.entry(key.clone()).or_insert_with(|| {
            groups.push(TicketGroup {
                key,
                tickets: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].tickets.push(ticket.clone());
    }

    for group in &mut groups {
        sort_group(&mut group.tickets, sort_by);
    }

    GroupedBoard { groups }
}

fn group_key(ticket: &Ticket, group_by: GroupMode) -> String {
    let value = match group_by {
        GroupMode::Status => ticket.status.clone(),
        GroupMode::User => ticket.user.clone(),
        GroupMode::Priority => ticket.priority.map(|p| p.to_string()),
    };
    value.unwrap_or_else(|| UNSPECIFIED_GROUP_KEY.to_string())
}

fn sort_group(tickets: &mut [Ticket], sort_by: SortMode) {
    match sort_by {
        // Higher priority first; tickets without a priority sort last.
        SortMode::Priority => {
            tickets.sort_by_key(|ticket| Reverse(ticket.priority.unwrap_or(i64::MIN)));
        }
        // Case-folded lexicographic order; fold ties keep input order.
        SortMode::Title => {
            tickets.sort_by_key(|ticket| ticket.title.to_lowercase());
        }
    }
}
