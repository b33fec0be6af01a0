pub mod clock;
pub mod config;
pub mod random;
pub mod repositories;

pub use clock::{ControllableClock, SystemClock};
pub use config::{ConfigError, RewardsConfig, ServerConfig};
pub use random::{SequenceRandom, ThreadRngRandom};
pub use repositories::{InMemoryAccountStore, InMemoryAssetCatalog};
