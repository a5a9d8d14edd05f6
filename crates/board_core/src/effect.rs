use crate::{GroupMode, SortMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the session's single ticket fetch.
    FetchTickets,
    /// Persist the full setting pair; both keys are rewritten together.
    SavePreferences {
        group_by: GroupMode,
        sort_by: SortMode,
    },
}
