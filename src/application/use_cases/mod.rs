mod buy_shares;
mod claim_free_share;
mod market_status;
mod move_shares;

pub use buy_shares::{BuyError, BuySharesCommand, BuySharesResult, BuySharesUseCase};
pub use claim_free_share::{ClaimError, ClaimFreeShareUseCase};
pub use market_status::GetMarketStatusUseCase;
pub use move_shares::{MoveSharesCommand, MoveSharesResult, MoveSharesUseCase};
