//! In-memory sensor status store.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::models::SensorStatus;
use crate::domain::ports::StatusStore;

/// Status store backed by a single atomic flag.
///
/// Starts inactive and forgets everything when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStatusStore {
    active: AtomicBool,
}

impl InMemoryStatusStore {
    /// Store starting at `initial`.
    pub const fn new(initial: SensorStatus) -> Self {
        Self {
            active: AtomicBool::new(initial.status),
        }
    }
}

impl StatusStore for InMemoryStatusStore {
    fn load(&self) -> SensorStatus {
        SensorStatus::new(self.active.load(Ordering::SeqCst))
    }

    fn store(&self, status: SensorStatus) {
        self.active.store(status.status, Ordering::SeqCst);
    }
}
