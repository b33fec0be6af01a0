use crate::application::ports::{AssetCatalog, CatalogError};
use crate::domain::Asset;
use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// In-memory asset catalog with fixed prices. Stands in for a market-data
/// feed; prices only change when the asset list is replaced.
pub struct InMemoryAssetCatalog {
    assets: Mutex<Vec<Asset>>,
}

impl InMemoryAssetCatalog {
    pub fn new(assets: Vec<Asset>) -> Self {
        InMemoryAssetCatalog {
            assets: Mutex::new(assets),
        }
    }

    pub fn with_defaults() -> Self {
        InMemoryAssetCatalog::new(vec![
            Asset::new("A", dec!(15), 10),
            Asset::new("B", dec!(20), 20),
            Asset::new("C", dec!(25), 30),
            Asset::new("D", dec!(100), 2),
        ])
    }

    pub fn replace_assets(&self, assets: Vec<Asset>) {
        *self.assets.lock() = assets;
    }

    pub fn snapshot(&self) -> Vec<Asset> {
        self.assets.lock().clone()
    }
}

#[async_trait]
impl AssetCatalog for InMemoryAssetCatalog {
    async fn list_tradable_assets(&self) -> Vec<String> {
        self.assets
            .lock()
            .iter()
            .map(|asset| asset.ticker_symbol.clone())
            .collect()
    }

    async fn latest_price(&self, ticker_symbol: &str) -> Result<Decimal, CatalogError> {
        self.assets
            .lock()
            .iter()
            .find(|asset| asset.ticker_symbol == ticker_symbol)
            .map(|asset| asset.share_price)
            .ok_or_else(|| CatalogError::AssetNotFound(ticker_symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_tickers_in_catalog_order() {
        let catalog = InMemoryAssetCatalog::with_defaults();
        assert_eq!(catalog.list_tradable_assets().await, vec!["A", "B", "C", "D"]);
    }

    #[tokio::test]
    async fn test_latest_price_for_known_and_unknown_tickers() {
        let catalog = InMemoryAssetCatalog::with_defaults();

        assert_eq!(catalog.latest_price("C").await, Ok(dec!(25)));
        assert_eq!(
            catalog.latest_price("Z").await,
            Err(CatalogError::AssetNotFound("Z".to_string()))
        );
    }

    #[tokio::test]
    async fn test_replace_assets_swaps_the_whole_catalog() {
        let catalog = InMemoryAssetCatalog::with_defaults();

        catalog.replace_assets(vec![Asset::new("X", dec!(7), 5)]);

        assert_eq!(catalog.list_tradable_assets().await, vec!["X"]);
        assert_eq!(catalog.latest_price("X").await, Ok(dec!(7)));
    }
}
