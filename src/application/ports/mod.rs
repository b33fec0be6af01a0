mod account_store;
mod asset_catalog;
mod random_source;

pub use account_store::AccountStore;
pub use asset_catalog::{AssetCatalog, CatalogError};
pub use random_source::RandomSource;
