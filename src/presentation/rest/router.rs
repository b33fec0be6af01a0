use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::RandomSource;
use crate::domain::{AllocationPolicy, Clock, MarketHours};
use crate::infrastructure::{InMemoryAccountStore, InMemoryAssetCatalog};

/// Application state shared across handlers - uses concrete infrastructure
/// types, generic over the clock and randomness so tests can pin both.
pub struct AppState<C: Clock, R: RandomSource> {
    pub clock: Arc<C>,
    pub random: Arc<R>,
    pub store: Arc<InMemoryAccountStore>,
    pub catalog: Arc<InMemoryAssetCatalog>,
    pub market_hours: MarketHours,
    pub allocation: AllocationPolicy,
}

impl<C: Clock, R: RandomSource> AppState<C, R> {
    pub fn new(
        clock: Arc<C>,
        random: Arc<R>,
        store: Arc<InMemoryAccountStore>,
        catalog: Arc<InMemoryAssetCatalog>,
        market_hours: MarketHours,
        allocation: AllocationPolicy,
    ) -> Self {
        AppState {
            clock,
            random,
            store,
            catalog,
            market_hours,
            allocation,
        }
    }
}

/// Create the REST API router
pub fn create_router<C, R>(state: Arc<AppState<C, R>>) -> Router
where
    C: Clock + 'static,
    R: RandomSource + 'static,
{
    Router::new()
        .route(
            "/api/claim-free-share",
            post(handlers::claim_free_share::<C, R>),
        )
        .route("/api/tradable-assets", get(handlers::tradable_assets::<C, R>))
        .route(
            "/api/latest-price/{ticker_symbol}",
            get(handlers::latest_price::<C, R>),
        )
        .route("/api/status/market", get(handlers::market_status::<C, R>))
        .route("/api/buy-shares-firm", post(handlers::buy_shares::<C, R>))
        .route("/api/shares-firm", get(handlers::firm_positions::<C, R>))
        .route("/api/move-shares-firm", post(handlers::move_shares::<C, R>))
        .route("/api/debug/data", get(handlers::debug_data::<C, R>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
