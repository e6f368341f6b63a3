//! Print the balance of every account.

use anyhow::Context;
use log::debug;
use starling_account::{Account, BalanceSnapshot};
use std::io::Write;

use crate::api::{fetch_balance, list_accounts, Fetch};

/// Name printed at the start of every line
pub const PROVIDER: &str = "Starling";

/// Format one report line for an account
pub fn format_line(provider: &str, account: &Account, balance: &BalanceSnapshot) -> String {
    let symbol = balance.symbol();

    format!(
        "{} - {} bal: {}{} (sav: {}{})",
        provider,
        account.name(),
        symbol,
        balance.spendable(),
        symbol,
        balance.savings(),
    )
}

/// List every account and write one line per account to `out`, in listing order.
/// Lines are written as soon as each balance arrives.
/// The first failure stops the report; lines already written stay written.
pub fn write_report<F, W>(client: &F, provider: &str, out: &mut W) -> anyhow::Result<usize>
where
    F: Fetch + ?Sized,
    W: Write,
{
    let accounts = list_accounts(client).context("Error listing accounts.")?;

    for account in &accounts {
        debug!("Fetching balance for {}", account);
        let balance = fetch_balance(client, account.uid()).with_context(|| {
            format!("Error fetching the balance of account `{}`.", account.name())
        })?;
        debug!(
            "Balance of {}: {} effective and {} total minor units of {}",
            account,
            balance.effective_minor_units(),
            balance.total_effective_minor_units(),
            balance.currency()
        );

        writeln!(out, "{}", format_line(provider, account, &balance))?;
    }

    Ok(accounts.len())
}
