//! Query the Starling API for accounts and their balances.

mod client;
mod error;

#[cfg(test)]
pub(crate) mod fake;

pub use self::client::{Fetch, StarlingClient, STARLING_API};
pub use self::error::ApiError;

use log::info;
use starling_account::{Account, AccountList, BalanceSnapshot};
use std::convert::TryFrom;

/// Path of the account listing endpoint
const ACCOUNTS_PATH: &str = "/accounts";

/// Path of the balance endpoint for an account
fn balance_path(account_uid: &str) -> String {
    format!("{}/{}/balance", ACCOUNTS_PATH, account_uid)
}

/// List the accounts of the authenticated user, in the provider's order.
pub fn list_accounts<F: Fetch + ?Sized>(client: &F) -> Result<Vec<Account>, ApiError> {
    let body = client.fetch(ACCOUNTS_PATH)?;

    let listing = AccountList::try_from(body.as_str()).map_err(|source| ApiError::Decode {
        path: ACCOUNTS_PATH.to_string(),
        source,
    })?;
    info!("Found {} accounts", listing.len());

    Ok(listing.into_accounts())
}

/// Fetch the balance breakdown of a single account.
pub fn fetch_balance<F: Fetch + ?Sized>(
    client: &F,
    account_uid: &str,
) -> Result<BalanceSnapshot, ApiError> {
    let path = balance_path(account_uid);
    let body = client.fetch(&path)?;

    BalanceSnapshot::try_from(body.as_str()).map_err(|source| ApiError::Decode { path, source })
}
