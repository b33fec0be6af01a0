//! Request/response DTOs for the REST API. Field names are camelCase on
//! the wire.

use crate::domain::{Asset, FirmAccount, UserAccount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimFreeShareRequest {
    pub account: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradableAssetResponse {
    pub ticker_symbol: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestPriceResponse {
    pub share_price: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuySharesRequest {
    pub ticker_symbol: String,
    /// Raw number so fractional input reaches quantity validation instead
    /// of failing deserialization.
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuySharesResponse {
    pub success: bool,
    pub share_price_paid: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSharesRequest {
    pub account: String,
    pub ticker_symbol: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSharesResponse {
    pub success: bool,
}

/// Full in-memory state dump, for inspection while developing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugDataResponse {
    pub our_account: FirmAccount,
    pub users: Vec<UserAccount>,
    pub assets: Vec<Asset>,
}

/// Generic failure envelope: `{ "error": true, "message": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            error: true,
            message: message.into(),
        }
    }
}
