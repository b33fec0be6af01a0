pub mod entities;
pub mod services;

// Re-export entity types
pub use entities::{Asset, FirmAccount, ShareLot, UserAccount};

// Re-export services
pub use services::{
    AllocationPolicy, Clock, InvalidThresholds, MarketHours, MarketStatus, NoEligibleShare,
};
