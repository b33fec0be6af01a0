use crate::domain::{Clock, MarketHours, MarketStatus};
use std::sync::Arc;

/// Report whether the market is open right now.
pub struct GetMarketStatusUseCase<C: Clock> {
    clock: Arc<C>,
    market_hours: MarketHours,
}

impl<C: Clock> GetMarketStatusUseCase<C> {
    pub fn new(clock: Arc<C>, market_hours: MarketHours) -> Self {
        GetMarketStatusUseCase {
            clock,
            market_hours,
        }
    }

    pub fn execute(&self) -> MarketStatus {
        self.market_hours.status(self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ControllableClock;
    use chrono::{Duration, FixedOffset, TimeZone};

    #[test]
    fn test_status_follows_the_injected_clock() {
        let sunday = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 7, 12, 0, 0)
            .unwrap();
        let clock = Arc::new(ControllableClock::at(sunday));
        let use_case = GetMarketStatusUseCase::new(Arc::clone(&clock), MarketHours::default());

        assert!(!use_case.execute().open);

        // Monday 08:00.
        clock.advance(Duration::hours(20));
        assert!(use_case.execute().open);
    }
}
