pub mod ports;
pub mod use_cases;

pub use ports::{AccountStore, AssetCatalog, CatalogError, RandomSource};
pub use use_cases::{
    BuyError, BuySharesCommand, BuySharesResult, BuySharesUseCase, ClaimError,
    ClaimFreeShareUseCase, GetMarketStatusUseCase, MoveSharesCommand, MoveSharesResult,
    MoveSharesUseCase,
};
