mod in_memory_catalog;
mod in_memory_store;

pub use in_memory_catalog::InMemoryAssetCatalog;
pub use in_memory_store::InMemoryAccountStore;
