use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::application::{
    AccountStore, AssetCatalog, BuyError, BuySharesCommand, BuySharesUseCase, CatalogError,
    ClaimFreeShareUseCase, GetMarketStatusUseCase, MoveSharesCommand, MoveSharesUseCase,
    RandomSource,
};
use crate::domain::{Clock, MarketStatus, ShareLot};
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// POST /api/claim-free-share
pub async fn claim_free_share<C: Clock, R: RandomSource>(
    State(state): State<Arc<AppState<C, R>>>,
    Json(req): Json<ClaimFreeShareRequest>,
) -> Result<Json<ShareLot>, ApiError> {
    let use_case = ClaimFreeShareUseCase::new(
        Arc::clone(&state.store),
        Arc::clone(&state.random),
        state.allocation.clone(),
    );

    use_case
        .execute(&req.account)
        .map(Json)
        .map_err(|e| ApiError::conflict(e.to_string()))
}

/// GET /api/tradable-assets
pub async fn tradable_assets<C: Clock, R: RandomSource>(
    State(state): State<Arc<AppState<C, R>>>,
) -> Json<Vec<TradableAssetResponse>> {
    let tickers = state.catalog.list_tradable_assets().await;
    Json(
        tickers
            .into_iter()
            .map(|ticker_symbol| TradableAssetResponse { ticker_symbol })
            .collect(),
    )
}

/// GET /api/latest-price/{ticker_symbol}
pub async fn latest_price<C: Clock, R: RandomSource>(
    Path(ticker_symbol): Path<String>,
    State(state): State<Arc<AppState<C, R>>>,
) -> Result<Json<LatestPriceResponse>, ApiError> {
    let share_price = state
        .catalog
        .latest_price(&ticker_symbol)
        .await
        .map_err(|e| ApiError::not_found(e.to_string()))?;

    Ok(Json(LatestPriceResponse { share_price }))
}

/// GET /api/status/market
pub async fn market_status<C: Clock, R: RandomSource>(
    State(state): State<Arc<AppState<C, R>>>,
) -> Json<MarketStatus> {
    let use_case = GetMarketStatusUseCase::new(Arc::clone(&state.clock), state.market_hours);
    Json(use_case.execute())
}

/// POST /api/buy-shares-firm
pub async fn buy_shares<C: Clock, R: RandomSource>(
    State(state): State<Arc<AppState<C, R>>>,
    Json(req): Json<BuySharesRequest>,
) -> Result<Json<BuySharesResponse>, ApiError> {
    let use_case = BuySharesUseCase::new(
        Arc::clone(&state.clock),
        Arc::clone(&state.catalog),
        Arc::clone(&state.store),
        state.market_hours,
    );

    let result = use_case
        .execute(BuySharesCommand {
            ticker_symbol: req.ticker_symbol,
            quantity: req.quantity,
        })
        .await
        .map_err(|e| match e {
            BuyError::InvalidQuantity => ApiError::bad_request(e.to_string()),
            BuyError::MarketClosed { .. } => ApiError::bad_request(e.to_string()),
            BuyError::Catalog(CatalogError::AssetNotFound(_)) => {
                ApiError::not_found(e.to_string())
            }
        })?;

    Ok(Json(BuySharesResponse {
        success: result.success,
        share_price_paid: result.share_price_paid,
    }))
}

/// GET /api/shares-firm
pub async fn firm_positions<C: Clock, R: RandomSource>(
    State(state): State<Arc<AppState<C, R>>>,
) -> Json<Vec<ShareLot>> {
    Json(state.store.firm().positions())
}

/// POST /api/move-shares-firm
pub async fn move_shares<C: Clock, R: RandomSource>(
    State(state): State<Arc<AppState<C, R>>>,
    Json(req): Json<MoveSharesRequest>,
) -> Json<MoveSharesResponse> {
    let result = MoveSharesUseCase::new(Arc::clone(&state.store)).execute(MoveSharesCommand {
        to_account: req.account,
        ticker_symbol: req.ticker_symbol,
        quantity: req.quantity,
    });

    Json(MoveSharesResponse {
        success: result.success,
    })
}

/// GET /api/debug/data
pub async fn debug_data<C: Clock, R: RandomSource>(
    State(state): State<Arc<AppState<C, R>>>,
) -> Json<DebugDataResponse> {
    Json(DebugDataResponse {
        our_account: state.store.firm(),
        users: state.store.users(),
        assets: state.catalog.snapshot(),
    })
}
