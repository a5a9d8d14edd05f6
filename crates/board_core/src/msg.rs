use crate::{GroupMode, SortMode, Ticket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Board opened; kicks off the one-shot ticket fetch.
    BoardOpened,
    /// Fetch resolved with a normalized ticket list.
    TicketsLoaded(Vec<Ticket>),
    /// Fetch rejected, or the payload was unusable.
    LoadFailed { message: String },
    /// User picked a grouping attribute.
    GroupModeSelected(GroupMode),
    /// User picked a sort key.
    SortModeSelected(SortMode),
    /// Fallback for placeholder wiring.
    NoOp,
}
