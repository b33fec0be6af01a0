mod asset;
mod share_lot;

pub use asset::Asset;
pub use share_lot::{FirmAccount, ShareLot, UserAccount};
