//! Rewards Simulator
//!
//! A brokerage "free share" rewards program simulator: a firm-owned rewards
//! account buys shares on a simulated stock market and hands single shares
//! out to onboarding users, weighted towards cheap shares.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain**: Core business entities and rules (ShareLot, MarketHours, AllocationPolicy)
//! - **Application**: Use cases and port interfaces (BuyShares, ClaimFreeShare, MoveShares)
//! - **Infrastructure**: Implementations of ports (InMemoryAccountStore, SystemClock, config)
//! - **Presentation**: REST API handlers
//!
//! # Example
//!
//! ```ignore
//! use rewards_sim::{RewardsConfig, RewardsSimulator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = RewardsConfig::default();
//!     let simulator = RewardsSimulator::new(config);
//!     simulator.run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    AllocationPolicy, Asset, Clock, FirmAccount, InvalidThresholds, MarketHours, MarketStatus,
    NoEligibleShare, ShareLot, UserAccount,
};

pub use infrastructure::{
    ConfigError, ControllableClock, InMemoryAccountStore, InMemoryAssetCatalog, RewardsConfig,
    SequenceRandom, ServerConfig, SystemClock, ThreadRngRandom,
};

pub use application::{
    AccountStore, AssetCatalog, BuyError, BuySharesCommand, BuySharesResult, BuySharesUseCase,
    CatalogError, ClaimError, ClaimFreeShareUseCase, GetMarketStatusUseCase, MoveSharesCommand,
    MoveSharesResult, MoveSharesUseCase, RandomSource,
};

pub use presentation::{ApiError, AppState, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The main rewards simulator server
pub struct RewardsSimulator<C: Clock + 'static, R: RandomSource + 'static> {
    pub config: RewardsConfig,
    pub clock: Arc<C>,
    pub random: Arc<R>,
    pub store: Arc<InMemoryAccountStore>,
    pub catalog: Arc<InMemoryAssetCatalog>,
}

impl<C: Clock + 'static, R: RandomSource + 'static> RewardsSimulator<C, R> {
    /// Create a simulator with explicit clock and randomness, seeded from
    /// the config's accounts and asset catalog.
    pub fn with_collaborators(config: RewardsConfig, clock: Arc<C>, random: Arc<R>) -> Self {
        let store = Arc::new(InMemoryAccountStore::new(
            config.firm.clone(),
            config.users.clone(),
        ));
        let catalog = Arc::new(InMemoryAssetCatalog::new(config.assets.clone()));

        RewardsSimulator {
            config,
            clock,
            random,
            store,
            catalog,
        }
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.clock),
            Arc::clone(&self.random),
            Arc::clone(&self.store),
            Arc::clone(&self.catalog),
            MarketHours::default(),
            self.config.allocation.clone(),
        ));

        create_router(state)
    }

    /// Run the simulator server
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let router = self.rest_router();

        tracing::info!("Rewards simulator listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl RewardsSimulator<SystemClock, ThreadRngRandom> {
    /// Create a simulator with the wall clock and real randomness
    pub fn new(config: RewardsConfig) -> Self {
        Self::with_collaborators(
            config,
            Arc::new(SystemClock::new()),
            Arc::new(ThreadRngRandom::new()),
        )
    }
}
