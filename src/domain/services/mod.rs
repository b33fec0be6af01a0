mod allocation;
mod clock;
mod market_hours;

pub use allocation::{AllocationPolicy, InvalidThresholds, NoEligibleShare};
pub use clock::Clock;
pub use market_hours::{MarketHours, MarketStatus};
