use crate::domain::models::SensorStatus;

/// Port for holding the sensor status following hexagonal architecture
///
/// Implementations own the single stored flag for one running service.
/// Each `load` and each `store` must be atomic on its own; no guarantee is
/// made across calls, so concurrent writers resolve as last writer wins.
///
/// # Examples
///
/// ```
/// use aviso::adapters::memory::InMemoryStatusStore;
/// use aviso::domain::models::SensorStatus;
/// use aviso::domain::ports::StatusStore;
///
/// let store = InMemoryStatusStore::default();
/// assert_eq!(store.load(), SensorStatus::new(false));
///
/// store.store(SensorStatus::new(true));
/// assert!(store.load().is_active());
/// ```
pub trait StatusStore: Send + Sync {
    /// Read the current status
    fn load(&self) -> SensorStatus;

    /// Replace the current status
    fn store(&self, status: SensorStatus);
}
