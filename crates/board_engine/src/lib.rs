//! Board engine: remote ticket retrieval and preference-file IO.
mod decode;
mod fetch;
mod persist;
mod source;
mod types;

pub use decode::{decode_payload, DecodeError};
pub use fetch::{FetchSettings, ReqwestTicketFetcher, TicketFetcher};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use source::{FetchOutcome, TicketSourceHandle};
pub use types::{FailureKind, FetchError, TicketRecord};
