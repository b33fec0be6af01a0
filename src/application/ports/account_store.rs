use crate::domain::{FirmAccount, UserAccount};

/// Storage port for the firm rewards account and the user accounts.
///
/// Mutations take a closure that runs under the store's lock, so every
/// read-modify-write sequence is atomic with respect to concurrent
/// callers. Accounts are created at startup from seeded state and never
/// deleted, which is what makes a check-then-mutate sequence on a user
/// safe.
pub trait AccountStore: Send + Sync {
    /// Snapshot of the firm rewards account.
    fn firm(&self) -> FirmAccount;

    /// Mutate the firm account atomically.
    fn with_firm<R>(&self, f: impl FnOnce(&mut FirmAccount) -> R) -> R;

    /// Snapshots of all user accounts.
    fn users(&self) -> Vec<UserAccount>;

    /// Look a user up by id.
    fn find_user(&self, id: &str) -> Option<UserAccount>;

    /// Mutate one user account atomically. Returns `None` when the user
    /// does not exist.
    fn with_user<R>(&self, id: &str, f: impl FnOnce(&mut UserAccount) -> R) -> Option<R>;
}
