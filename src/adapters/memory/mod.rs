//! In-memory adapters.

pub mod message_log;
pub mod status_store;

pub use message_log::InMemoryMessageLog;
pub use status_store::InMemoryStatusStore;
