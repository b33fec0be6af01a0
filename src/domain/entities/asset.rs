use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A market-available asset: what the simulated stock market is selling.
///
/// From the ledger's point of view this is a read-only price and supply
/// source; the firm's own holdings are tracked as [`ShareLot`]s.
///
/// [`ShareLot`]: super::ShareLot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub ticker_symbol: String,
    /// Current selling price.
    pub share_price: Decimal,
    /// Units available on the market.
    pub quantity: u32,
}

impl Asset {
    pub fn new(ticker_symbol: impl Into<String>, share_price: Decimal, quantity: u32) -> Self {
        Asset {
            ticker_symbol: ticker_symbol.into(),
            share_price,
            quantity,
        }
    }
}
