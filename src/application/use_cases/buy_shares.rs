use crate::application::ports::{AccountStore, AssetCatalog, CatalogError};
use crate::domain::{Clock, MarketHours};
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

/// Purchase shares into the firm's rewards account.
///
/// Only works while the stock market is open, and only for whole-share
/// quantities.
#[derive(Debug, Clone)]
pub struct BuySharesCommand {
    pub ticker_symbol: String,
    /// Kept as a raw number so a fractional request reaches the validation
    /// step instead of being mangled at the boundary.
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuySharesResult {
    pub success: bool,
    /// Total money debited; zero when the purchase did not go through.
    pub share_price_paid: Decimal,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuyError {
    #[error("you can only buy shares using positive integer quantities, please try again")]
    InvalidQuantity,
    #[error(
        "stock market is closed. Check again on {next_opening_time}. \
         Next closing time will be: {next_closing_time}"
    )]
    MarketClosed {
        next_opening_time: DateTime<FixedOffset>,
        next_closing_time: DateTime<FixedOffset>,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub struct BuySharesUseCase<C, A, S>
where
    C: Clock,
    A: AssetCatalog,
    S: AccountStore,
{
    clock: Arc<C>,
    catalog: Arc<A>,
    store: Arc<S>,
    market_hours: MarketHours,
}

impl<C, A, S> BuySharesUseCase<C, A, S>
where
    C: Clock,
    A: AssetCatalog,
    S: AccountStore,
{
    pub fn new(clock: Arc<C>, catalog: Arc<A>, store: Arc<S>, market_hours: MarketHours) -> Self {
        BuySharesUseCase {
            clock,
            catalog,
            store,
            market_hours,
        }
    }

    pub async fn execute(&self, command: BuySharesCommand) -> Result<BuySharesResult, BuyError> {
        let quantity = parse_whole_quantity(command.quantity).ok_or(BuyError::InvalidQuantity)?;

        let status = self.market_hours.status(self.clock.now());
        if !status.open {
            return Err(BuyError::MarketClosed {
                next_opening_time: status.next_opening_time,
                next_closing_time: status.next_closing_time,
            });
        }

        let share_price = self.catalog.latest_price(&command.ticker_symbol).await?;
        let cost = share_price * Decimal::from(quantity);

        // Funds check, debit and lot merge happen under one firm lock so a
        // concurrent purchase cannot overspend `money_left`.
        let result = self.store.with_firm(|firm| {
            if firm.money_left < cost {
                return BuySharesResult {
                    success: false,
                    share_price_paid: Decimal::ZERO,
                };
            }
            firm.money_left -= cost;
            firm.add_shares(&command.ticker_symbol, share_price, quantity);
            BuySharesResult {
                success: true,
                share_price_paid: cost,
            }
        });

        if result.success {
            tracing::info!(
                ticker = %command.ticker_symbol,
                quantity,
                paid = %result.share_price_paid,
                "bought shares into the rewards account"
            );
        }

        Ok(result)
    }
}

/// A valid purchase quantity is a positive integer; no fractional shares.
fn parse_whole_quantity(quantity: f64) -> Option<u32> {
    if quantity.fract() == 0.0 && quantity >= 1.0 && quantity <= u32::MAX as f64 {
        Some(quantity as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShareLot;
    use crate::infrastructure::{ControllableClock, InMemoryAccountStore, InMemoryAssetCatalog};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn open_clock() -> Arc<ControllableClock> {
        // Wednesday 2024-01-03 at noon, inside market hours.
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 3, 12, 0, 0)
            .unwrap();
        Arc::new(ControllableClock::at(now))
    }

    fn closed_clock() -> Arc<ControllableClock> {
        // Saturday 2024-01-06.
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 6, 12, 0, 0)
            .unwrap();
        Arc::new(ControllableClock::at(now))
    }

    fn use_case(
        clock: Arc<ControllableClock>,
        store: Arc<InMemoryAccountStore>,
    ) -> BuySharesUseCase<ControllableClock, InMemoryAssetCatalog, InMemoryAccountStore> {
        BuySharesUseCase::new(
            clock,
            Arc::new(InMemoryAssetCatalog::with_defaults()),
            store,
            MarketHours::default(),
        )
    }

    fn command(ticker: &str, quantity: f64) -> BuySharesCommand {
        BuySharesCommand {
            ticker_symbol: ticker.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_fractional_quantity_is_rejected() {
        let store = Arc::new(InMemoryAccountStore::with_defaults());
        let result = use_case(open_clock(), store).execute(command("A", 1.5)).await;
        assert_eq!(result, Err(BuyError::InvalidQuantity));
    }

    #[tokio::test]
    async fn test_zero_quantity_is_rejected() {
        let store = Arc::new(InMemoryAccountStore::with_defaults());
        let result = use_case(open_clock(), store).execute(command("A", 0.0)).await;
        assert_eq!(result, Err(BuyError::InvalidQuantity));
    }

    #[tokio::test]
    async fn test_buying_while_closed_carries_next_instants() {
        let store = Arc::new(InMemoryAccountStore::with_defaults());
        let result = use_case(closed_clock(), store).execute(command("A", 1.0)).await;

        let next_monday_open = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 8, 8, 0, 0)
            .unwrap();
        match result {
            Err(BuyError::MarketClosed {
                next_opening_time, ..
            }) => assert_eq!(next_opening_time, next_monday_open),
            other => panic!("expected MarketClosed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_ticker_propagates_not_found() {
        let store = Arc::new(InMemoryAccountStore::with_defaults());
        let result = use_case(open_clock(), store).execute(command("ZZZ", 1.0)).await;
        assert_eq!(
            result,
            Err(BuyError::Catalog(CatalogError::AssetNotFound(
                "ZZZ".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_first_purchase_appends_lot_and_debits_cost() {
        let store = Arc::new(InMemoryAccountStore::new(
            crate::domain::FirmAccount::new(dec!(1000)),
            vec![],
        ));

        let result = use_case(open_clock(), Arc::clone(&store))
            .execute(command("A", 2.0))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.share_price_paid, dec!(30));

        let firm = store.firm();
        assert_eq!(firm.money_left, dec!(970));
        assert_eq!(firm.shares, vec![ShareLot::new("A", 2, dec!(15))]);
    }

    #[tokio::test]
    async fn test_purchase_merges_into_same_price_lot() {
        let store = Arc::new(InMemoryAccountStore::new(
            crate::domain::FirmAccount::new(dec!(1000))
                .with_shares(vec![ShareLot::new("A", 1, dec!(15))]),
            vec![],
        ));

        use_case(open_clock(), Arc::clone(&store))
            .execute(command("A", 2.0))
            .await
            .unwrap();

        let firm = store.firm();
        assert_eq!(firm.shares, vec![ShareLot::new("A", 3, dec!(15))]);
    }

    #[tokio::test]
    async fn test_purchase_at_new_price_appends_second_lot() {
        let store = Arc::new(InMemoryAccountStore::new(
            crate::domain::FirmAccount::new(dec!(1000))
                .with_shares(vec![ShareLot::new("A", 1, dec!(4))]),
            vec![],
        ));

        use_case(open_clock(), Arc::clone(&store))
            .execute(command("A", 2.0))
            .await
            .unwrap();

        let firm = store.firm();
        assert_eq!(firm.shares.len(), 2);
        assert_eq!(firm.shares[1], ShareLot::new("A", 2, dec!(15)));
    }

    #[tokio::test]
    async fn test_insufficient_funds_is_a_result_not_an_error() {
        let store = Arc::new(InMemoryAccountStore::new(
            crate::domain::FirmAccount::new(dec!(10)),
            vec![],
        ));

        let result = use_case(open_clock(), Arc::clone(&store))
            .execute(command("A", 2.0))
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.share_price_paid, Decimal::ZERO);
        assert_eq!(store.firm().money_left, dec!(10));
    }
}
