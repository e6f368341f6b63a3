//! Schema for Starling accounts and balances, and the decoding of the
//! provider's JSON responses into them.

pub mod account;
pub mod balance;
pub mod currency;
pub mod error;
mod parse;

pub use self::account::{Account, AccountList};
pub use self::balance::BalanceSnapshot;
pub use self::currency::Currency;
pub use self::error::DecodeError;
