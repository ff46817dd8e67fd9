//! Adapters implementing the domain ports and the HTTP surface.

pub mod http;
pub mod memory;
pub mod tracing_log;
