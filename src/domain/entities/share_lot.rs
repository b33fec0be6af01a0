//! Share lots and the accounts that hold them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quantity of one ticker held at a specific purchase price.
///
/// A single ticker may appear as several lots bought at different prices.
/// Lot identity for merging is `(ticker_symbol, share_price)`; lots at
/// differing prices are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLot {
    pub ticker_symbol: String,
    pub quantity: u32,
    /// The price the shares were bought at.
    pub share_price: Decimal,
}

impl ShareLot {
    pub fn new(ticker_symbol: impl Into<String>, quantity: u32, share_price: Decimal) -> Self {
        ShareLot {
            ticker_symbol: ticker_symbol.into(),
            quantity,
            share_price,
        }
    }

    /// Whether `self` and the given ticker/price form the same merge target.
    pub fn same_lot(&self, ticker_symbol: &str, share_price: Decimal) -> bool {
        self.ticker_symbol == ticker_symbol && self.share_price == share_price
    }
}

/// The firm's rewards account: cash plus an ordered sequence of lots.
///
/// `money_left` only ever decreases; there is no sell path. Lots may reach
/// quantity 0 but are never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmAccount {
    pub money_left: Decimal,
    pub shares: Vec<ShareLot>,
}

impl FirmAccount {
    pub fn new(money_left: Decimal) -> Self {
        FirmAccount {
            money_left,
            shares: Vec::new(),
        }
    }

    pub fn with_shares(mut self, shares: Vec<ShareLot>) -> Self {
        self.shares = shares;
        self
    }

    /// Merge `quantity` shares into the `(ticker, price)` lot, or append a
    /// new lot when none exists at that price.
    pub fn add_shares(&mut self, ticker_symbol: &str, share_price: Decimal, quantity: u32) {
        match self
            .shares
            .iter_mut()
            .find(|lot| lot.same_lot(ticker_symbol, share_price))
        {
            Some(lot) => lot.quantity += quantity,
            None => self
                .shares
                .push(ShareLot::new(ticker_symbol, quantity, share_price)),
        }
    }

    /// Lots with quantity > 0, in stored order. Zero-quantity lots stay in
    /// storage so later purchases at the same price can top them up.
    pub fn positions(&self) -> Vec<ShareLot> {
        self.shares
            .iter()
            .filter(|lot| lot.quantity > 0)
            .cloned()
            .collect()
    }

    /// First lot of the ticker with shares left to give, regardless of price.
    pub fn first_available_lot_mut(&mut self, ticker_symbol: &str) -> Option<&mut ShareLot> {
        self.shares
            .iter_mut()
            .find(|lot| lot.ticker_symbol == ticker_symbol && lot.quantity > 0)
    }
}

/// A user's own account, identified by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub shares: Vec<ShareLot>,
}

impl UserAccount {
    pub fn new(id: impl Into<String>) -> Self {
        UserAccount {
            id: id.into(),
            shares: Vec::new(),
        }
    }

    pub fn with_shares(mut self, shares: Vec<ShareLot>) -> Self {
        self.shares = shares;
        self
    }

    /// Credit the user with a lot: merge into an identity-equal lot or
    /// append a clone.
    pub fn credit(&mut self, ticker_symbol: &str, share_price: Decimal, quantity: u32) {
        match self
            .shares
            .iter_mut()
            .find(|lot| lot.same_lot(ticker_symbol, share_price))
        {
            Some(lot) => lot.quantity += quantity,
            None => self
                .shares
                .push(ShareLot::new(ticker_symbol, quantity, share_price)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_shares_merges_same_price() {
        let mut firm = FirmAccount::new(dec!(1000))
            .with_shares(vec![ShareLot::new("A", 1, dec!(15))]);

        firm.add_shares("A", dec!(15), 2);

        assert_eq!(firm.shares.len(), 1);
        assert_eq!(firm.shares[0].quantity, 3);
    }

    #[test]
    fn test_add_shares_appends_distinct_price() {
        let mut firm = FirmAccount::new(dec!(1000))
            .with_shares(vec![ShareLot::new("A", 1, dec!(15))]);

        firm.add_shares("A", dec!(18), 2);

        assert_eq!(firm.shares.len(), 2);
        assert_eq!(firm.shares[1], ShareLot::new("A", 2, dec!(18)));
    }

    #[test]
    fn test_positions_filters_empty_lots_but_keeps_them_stored() {
        let firm = FirmAccount::new(dec!(1000)).with_shares(vec![
            ShareLot::new("A", 0, dec!(4)),
            ShareLot::new("B", 20, dec!(20)),
        ]);

        let positions = firm.positions();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].ticker_symbol, "B");
        assert_eq!(firm.shares.len(), 2);
    }

    #[test]
    fn test_first_available_lot_skips_empty() {
        let mut firm = FirmAccount::new(dec!(1000)).with_shares(vec![
            ShareLot::new("A", 0, dec!(4)),
            ShareLot::new("A", 5, dec!(15)),
        ]);

        let lot = firm.first_available_lot_mut("A").unwrap();
        assert_eq!(lot.share_price, dec!(15));
    }

    #[test]
    fn test_user_credit_merges_by_ticker_and_price() {
        let mut user = UserAccount::new("2")
            .with_shares(vec![ShareLot::new("A", 10, dec!(15))]);

        user.credit("A", dec!(15), 1);
        assert_eq!(user.shares.len(), 1);
        assert_eq!(user.shares[0].quantity, 11);

        user.credit("A", dec!(4), 1);
        assert_eq!(user.shares.len(), 2);
    }
}
