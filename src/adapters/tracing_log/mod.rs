//! Message log that writes through `tracing`.

use crate::domain::ports::MessageLog;

/// Target used for echo log events, so they can be filtered with `RUST_LOG`.
pub const ECHO_LOG_TARGET: &str = "aviso::echo";

/// Emits every recorded line as an INFO event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMessageLog;

impl TracingMessageLog {
    /// New log.
    pub const fn new() -> Self {
        Self
    }
}

impl MessageLog for TracingMessageLog {
    fn record(&self, line: &str) {
        tracing::info!(target: ECHO_LOG_TARGET, "{}", line);
    }
}
