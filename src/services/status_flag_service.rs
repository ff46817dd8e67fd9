//! Status flag service: read-and-optionally-write access to the sensor status.

use std::sync::Arc;

use crate::domain::models::SensorStatus;
use crate::domain::ports::StatusStore;

/// Holds the sensor status for one deployment and applies client reports.
#[derive(Clone)]
pub struct StatusFlagService {
    store: Arc<dyn StatusStore>,
}

impl StatusFlagService {
    /// Service over `store`; clones share it.
    pub fn new(store: Arc<dyn StatusStore>) -> Self {
        Self { store }
    }

    /// Current status, unchanged.
    pub fn current(&self) -> SensorStatus {
        self.store.load()
    }

    /// Apply an optional activation token and return the resulting status.
    ///
    /// Without a token this is a plain read. With one, the coerced value is
    /// stored and returned as-is, so the caller sees what it wrote even if
    /// another request writes right after.
    pub fn report(&self, activation: Option<&str>) -> SensorStatus {
        match activation {
            Some(token) => {
                let status = SensorStatus::from_token(token);
                self.store.store(status);
                tracing::debug!(token, active = status.is_active(), "sensor status updated");
                status
            }
            None => self.current(),
        }
    }
}

impl std::fmt::Debug for StatusFlagService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusFlagService")
            .field("status", &self.current())
            .finish()
    }
}
