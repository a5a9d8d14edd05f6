use crate::view_model::BoardViewModel;
use crate::{GroupMode, SortMode, Ticket};

/// Lifecycle of the session's single fetch.
///
/// `Failed` is terminal; the only recovery path is restarting the program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: BoardPhase,
    tickets: Vec<Ticket>,
    group_by: GroupMode,
    sort_by: SortMode,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with the persisted setting pair read at startup.
    pub fn with_preferences(group_by: GroupMode, sort_by: SortMode) -> Self {
        Self {
            group_by,
            sort_by,
            ..Self::default()
        }
    }

    pub fn view(&self) -> BoardViewModel {
        BoardViewModel::build(
            &self.phase,
            &self.tickets,
            self.group_by,
            self.sort_by,
            self.dirty,
        )
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn phase(&self) -> &BoardPhase {
        &self.phase
    }

    pub(crate) fn group_by(&self) -> GroupMode {
        self.group_by
    }

    pub(crate) fn sort_by(&self) -> SortMode {
        self.sort_by
    }

    pub(crate) fn begin_loading(&mut self) {
        self.phase = BoardPhase::Loading;
        self.dirty = true;
    }

    pub(crate) fn apply_loaded(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
        self.phase = BoardPhase::Ready;
        self.dirty = true;
    }

    pub(crate) fn apply_failed(&mut self, message: String) {
        self.phase = BoardPhase::Failed { message };
        self.dirty = true;
    }

    pub(crate) fn set_group_by(&mut self, group_by: GroupMode) {
        self.group_by = group_by;
        self.dirty = true;
    }

    pub(crate) fn set_sort_by(&mut self, sort_by: SortMode) {
        self.sort_by = sort_by;
        self.dirty = true;
    }
}
