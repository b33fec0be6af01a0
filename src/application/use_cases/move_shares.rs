use crate::application::ports::AccountStore;
use std::sync::Arc;

/// Move shares from the firm's rewards account to a user's own account.
///
/// Every failure mode is an expected outcome reported through
/// `success: false`; callers branch on the flag rather than on errors.
#[derive(Debug, Clone)]
pub struct MoveSharesCommand {
    pub to_account: String,
    pub ticker_symbol: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSharesResult {
    pub success: bool,
}

impl MoveSharesResult {
    const FAILURE: MoveSharesResult = MoveSharesResult { success: false };
    const SUCCESS: MoveSharesResult = MoveSharesResult { success: true };
}

pub struct MoveSharesUseCase<S: AccountStore> {
    store: Arc<S>,
}

impl<S: AccountStore> MoveSharesUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        MoveSharesUseCase { store }
    }

    /// Only the first lot of the ticker with shares left is considered;
    /// a transfer is never fulfilled across several lots at different
    /// prices. That is a deliberate simplification of the rewards ledger.
    pub fn execute(&self, command: MoveSharesCommand) -> MoveSharesResult {
        if command.quantity == 0 {
            return MoveSharesResult::FAILURE;
        }

        // Validate the destination before touching the firm side, so a
        // failed transfer never leaves the firm lot decremented.
        if self.store.find_user(&command.to_account).is_none() {
            return MoveSharesResult::FAILURE;
        }

        let debited_price = self.store.with_firm(|firm| {
            let lot = firm.first_available_lot_mut(&command.ticker_symbol)?;
            if lot.quantity < command.quantity {
                return None;
            }
            lot.quantity -= command.quantity;
            Some(lot.share_price)
        });
        let Some(share_price) = debited_price else {
            return MoveSharesResult::FAILURE;
        };

        // Users are never deleted, so the credit cannot miss after the
        // existence check above.
        let credited = self.store.with_user(&command.to_account, |user| {
            user.credit(&command.ticker_symbol, share_price, command.quantity);
        });

        match credited {
            Some(()) => {
                tracing::info!(
                    user = %command.to_account,
                    ticker = %command.ticker_symbol,
                    quantity = command.quantity,
                    "moved shares out of the rewards account"
                );
                MoveSharesResult::SUCCESS
            }
            None => MoveSharesResult::FAILURE,
        }
    }
}
