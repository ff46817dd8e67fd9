//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that infrastructure adapters must implement:
//! - StatusStore: storage of the sensor status flag
//! - MessageLog: sink for echo log lines
//!
//! These traits keep the services independent of where state lives and
//! where log lines go.

pub mod message_log;
pub mod status_store;

pub use message_log::MessageLog;
pub use status_store::StatusStore;
