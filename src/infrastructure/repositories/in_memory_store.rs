use crate::application::ports::AccountStore;
use crate::domain::{FirmAccount, ShareLot, UserAccount};
use parking_lot::Mutex;
use rust_decimal_macros::dec;

/// In-memory account storage. The firm account and the user list sit behind
/// separate locks; a cross-account transfer takes them one at a time, which
/// is safe because users are never deleted mid-flight.
pub struct InMemoryAccountStore {
    firm: Mutex<FirmAccount>,
    users: Mutex<Vec<UserAccount>>,
}

impl InMemoryAccountStore {
    pub fn new(firm: FirmAccount, users: Vec<UserAccount>) -> Self {
        InMemoryAccountStore {
            firm: Mutex::new(firm),
            users: Mutex::new(users),
        }
    }

    /// The stock seed: a funded firm account holding a lot of every default
    /// asset, one empty user and one user already holding shares.
    pub fn with_defaults() -> Self {
        let firm = FirmAccount::new(dec!(1000)).with_shares(vec![
            ShareLot::new("A", 1, dec!(4)),
            ShareLot::new("B", 20, dec!(20)),
            ShareLot::new("C", 30, dec!(25)),
            ShareLot::new("D", 2, dec!(100)),
        ]);
        let users = vec![
            UserAccount::new("1"),
            UserAccount::new("2").with_shares(vec![ShareLot::new("A", 10, dec!(15))]),
        ];
        InMemoryAccountStore::new(firm, users)
    }
}

impl AccountStore for InMemoryAccountStore {
    fn firm(&self) -> FirmAccount {
        self.firm.lock().clone()
    }

    fn with_firm<R>(&self, f: impl FnOnce(&mut FirmAccount) -> R) -> R {
        f(&mut self.firm.lock())
    }

    fn users(&self) -> Vec<UserAccount> {
        self.users.lock().clone()
    }

    fn find_user(&self, id: &str) -> Option<UserAccount> {
        self.users.lock().iter().find(|user| user.id == id).cloned()
    }

    fn with_user<R>(&self, id: &str, f: impl FnOnce(&mut UserAccount) -> R) -> Option<R> {
        self.users
            .lock()
            .iter_mut()
            .find(|user| user.id == id)
            .map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_matches_expected_accounts() {
        let store = InMemoryAccountStore::with_defaults();

        let firm = store.firm();
        assert_eq!(firm.money_left, dec!(1000));
        assert_eq!(firm.shares.len(), 4);

        let users = store.users();
        assert_eq!(users.len(), 2);
        assert!(users[0].shares.is_empty());
        assert_eq!(users[1].shares[0], ShareLot::new("A", 10, dec!(15)));
    }

    #[test]
    fn test_with_user_returns_none_for_unknown_id() {
        let store = InMemoryAccountStore::with_defaults();
        assert!(store.with_user("missing", |_| ()).is_none());
    }

    #[test]
    fn test_with_firm_mutations_are_visible_in_snapshots() {
        let store = InMemoryAccountStore::with_defaults();

        store.with_firm(|firm| firm.money_left -= dec!(100));

        assert_eq!(store.firm().money_left, dec!(900));
    }
}
