use chrono::{DateTime, FixedOffset};

/// Basic clock trait - provides the current instant.
///
/// Instants are timezone-aware so market-hours decisions happen in the
/// caller's local zone. Implementations can be the system clock or a
/// controllable clock for deterministic tests.
pub trait Clock: Send + Sync {
    /// Get current time from this clock's perspective.
    fn now(&self) -> DateTime<FixedOffset>;
}
