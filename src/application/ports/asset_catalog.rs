use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("there are no assets with this tickerSymbol={0}")]
    AssetNotFound(String),
}

/// Market-data port: which assets are tradable and at what price.
///
/// Async because a real implementation would sit in front of a broker or
/// market-data API; the simulator ships an in-memory one.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    /// Ticker symbols available for trading, in catalog order.
    async fn list_tradable_assets(&self) -> Vec<String>;

    /// Latest selling price for an asset.
    async fn latest_price(&self, ticker_symbol: &str) -> Result<Decimal, CatalogError>;
}
