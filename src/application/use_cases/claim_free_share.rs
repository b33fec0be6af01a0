use crate::application::ports::{AccountStore, RandomSource};
use crate::application::use_cases::{MoveSharesCommand, MoveSharesUseCase};
use crate::domain::{AllocationPolicy, NoEligibleShare, ShareLot};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error(transparent)]
    NoEligibleShare(#[from] NoEligibleShare),
    /// Several transfer failure causes collapse into this one user-facing
    /// message on purpose.
    #[error(
        "there was an error while transferring your free share to your \
         account, please try again later or contact us"
    )]
    TransferFailed,
}

/// Grant one free share to an onboarding user.
///
/// Reads the firm's open positions, draws a value tier, picks the lot and
/// moves a single share into the user's account.
pub struct ClaimFreeShareUseCase<S, R>
where
    S: AccountStore,
    R: RandomSource,
{
    store: Arc<S>,
    random: Arc<R>,
    policy: AllocationPolicy,
}

impl<S, R> ClaimFreeShareUseCase<S, R>
where
    S: AccountStore,
    R: RandomSource,
{
    pub fn new(store: Arc<S>, random: Arc<R>, policy: AllocationPolicy) -> Self {
        ClaimFreeShareUseCase {
            store,
            random,
            policy,
        }
    }

    pub fn execute(&self, to_account: &str) -> Result<ShareLot, ClaimError> {
        let positions = self.store.firm().positions();
        let free_share = self
            .policy
            .pick_free_share(&positions, self.random.next())?;

        let transfer = MoveSharesUseCase::new(Arc::clone(&self.store)).execute(MoveSharesCommand {
            to_account: to_account.to_string(),
            ticker_symbol: free_share.ticker_symbol.clone(),
            quantity: free_share.quantity,
        });

        if transfer.success {
            tracing::info!(
                user = %to_account,
                ticker = %free_share.ticker_symbol,
                price = %free_share.share_price,
                "granted a free share"
            );
            Ok(free_share)
        } else {
            Err(ClaimError::TransferFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FirmAccount, UserAccount};
    use crate::infrastructure::{InMemoryAccountStore, SequenceRandom};
    use rust_decimal_macros::dec;

    fn default_store() -> Arc<InMemoryAccountStore> {
        Arc::new(InMemoryAccountStore::with_defaults())
    }

    fn use_case(
        store: Arc<InMemoryAccountStore>,
        draw: f64,
    ) -> ClaimFreeShareUseCase<InMemoryAccountStore, SequenceRandom> {
        ClaimFreeShareUseCase::new(
            store,
            Arc::new(SequenceRandom::new(vec![draw])),
            AllocationPolicy::default(),
        )
    }

    #[test]
    fn test_claim_moves_one_cheap_share_to_the_user() {
        let store = default_store();

        // 0.5 draws the cheapest tier; the default firm seed holds A at 4.
        let share = use_case(Arc::clone(&store), 0.5).execute("1").unwrap();

        assert_eq!(share, ShareLot::new("A", 1, dec!(4)));
        let user = store.find_user("1").unwrap();
        assert_eq!(user.shares, vec![ShareLot::new("A", 1, dec!(4))]);
        assert_eq!(store.firm().shares[0].quantity, 0);
    }

    #[test]
    fn test_no_lot_in_drawn_tier_is_a_try_later_error() {
        let store = Arc::new(InMemoryAccountStore::new(
            FirmAccount::new(dec!(1000)).with_shares(vec![ShareLot::new("D", 2, dec!(100))]),
            vec![UserAccount::new("1")],
        ));

        let result = use_case(store, 0.5).execute("1");
        assert_eq!(result, Err(ClaimError::NoEligibleShare(NoEligibleShare)));
    }

    #[test]
    fn test_failed_transfer_collapses_into_one_error() {
        // Unknown user: the underlying transfer fails, but the claimant
        // only ever sees the generic claim failure.
        let store = default_store();
        let result = use_case(store, 0.5).execute("nobody");
        assert_eq!(result, Err(ClaimError::TransferFailed));
    }

    #[test]
    fn test_expensive_tier_draw_picks_the_expensive_lot() {
        let store = default_store();

        let share = use_case(Arc::clone(&store), 0.99).execute("1").unwrap();

        assert_eq!(share.ticker_symbol, "D");
        assert_eq!(share.quantity, 1);
        assert_eq!(share.share_price, dec!(100));
    }
}
