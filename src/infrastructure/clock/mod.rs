use crate::domain::Clock;
use chrono::{DateTime, Duration, FixedOffset, Local};
use parking_lot::RwLock;

/// Wall clock in the caller's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to an explicit instant; time only moves via `set` or
/// `advance`. Used to make market-hours decisions deterministic in tests.
pub struct ControllableClock {
    current: RwLock<DateTime<FixedOffset>>,
}

impl ControllableClock {
    pub fn at(instant: DateTime<FixedOffset>) -> Self {
        ControllableClock {
            current: RwLock::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<FixedOffset>) {
        *self.current.write() = instant;
    }

    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.write();
        *current += duration;
    }
}

impl Clock for ControllableClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.current.read()
    }
}
