//! Message echo service: log a message and acknowledge it.

use std::sync::Arc;

use crate::domain::models::IncomingMessage;
use crate::domain::ports::MessageLog;

/// Acknowledgment returned for every received message.
pub const ACKNOWLEDGMENT: &str = "OK";

/// Logs incoming messages and acknowledges them. Nothing is retained.
#[derive(Clone)]
pub struct MessageEchoService {
    log: Arc<dyn MessageLog>,
}

impl MessageEchoService {
    /// Service writing to `log`.
    pub fn new(log: Arc<dyn MessageLog>) -> Self {
        Self { log }
    }

    /// Log the message and return the acknowledgment.
    pub fn receive(&self, message: &IncomingMessage) -> &'static str {
        self.log.record(&message.log_line());
        ACKNOWLEDGMENT
    }
}

impl std::fmt::Debug for MessageEchoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageEchoService").finish_non_exhaustive()
    }
}
