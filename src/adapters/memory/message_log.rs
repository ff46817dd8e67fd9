//! In-memory message log.

use std::sync::{Mutex, PoisonError};

use crate::domain::ports::MessageLog;

/// Message log that keeps every recorded line in memory.
///
/// Useful for inspecting what the echo service logged without installing a
/// tracing subscriber.
#[derive(Debug, Default)]
pub struct InMemoryMessageLog {
    lines: Mutex<Vec<String>>,
}

impl InMemoryMessageLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MessageLog for InMemoryMessageLog {
    fn record(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let log = InMemoryMessageLog::new();
        log.record("Recebido: a");
        log.record("Recebido: b");

        assert_eq!(log.lines(), vec!["Recebido: a", "Recebido: b"]);
    }
}
