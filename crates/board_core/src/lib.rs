//! Board core: pure state machine and view-model helpers.
mod effect;
mod grouping;
mod msg;
mod state;
mod ticket;
mod update;
mod view_model;

pub use effect::Effect;
pub use grouping::{group_and_sort, GroupedBoard, TicketGroup, UNSPECIFIED_GROUP_KEY};
pub use msg::Msg;
pub use state::{AppState, BoardPhase};
pub use ticket::{priority_label, GroupMode, SortMode, Ticket, PRIORITY_LABELS};
pub use update::update;
pub use view_model::{BoardViewModel, CardView, ColumnView};
