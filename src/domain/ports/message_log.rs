/// Port for the operational log the echo service writes to
///
/// Implementations (adapters) decide where lines end up:
/// - `tracing` events for the running server
/// - an in-memory buffer for inspection and tests
pub trait MessageLog: Send + Sync {
    /// Record one line
    fn record(&self, line: &str);
}
