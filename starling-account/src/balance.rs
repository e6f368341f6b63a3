//! Balance breakdown for a single account.

use serde::Deserialize;
use std::convert::TryFrom;

use crate::parse::{decode_body, null_as_default};
use crate::{Currency, DecodeError};

/// Minor units per major unit.
/// Every currency is assumed to have two decimal places.
const MINOR_PER_MAJOR: f64 = 100.0;

/// Wire format of the balance endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    effective_balance: CurrencyAndAmount,
    #[serde(default, deserialize_with = "null_as_default")]
    total_effective_balance: CurrencyAndAmount,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyAndAmount {
    #[serde(default, deserialize_with = "null_as_default")]
    minor_units: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    currency: String,
}

/// The spendable and total balances of an account, in minor units
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceSnapshot {
    effective_minor_units: i64,
    total_effective_minor_units: i64,
    currency: Currency,
}

impl BalanceSnapshot {
    pub fn new(effective_minor_units: i64, total_effective_minor_units: i64, currency: Currency) -> Self {
        BalanceSnapshot {
            effective_minor_units,
            total_effective_minor_units,
            currency,
        }
    }

    pub fn effective_minor_units(&self) -> i64 {
        self.effective_minor_units
    }

    pub fn total_effective_minor_units(&self) -> i64 {
        self.total_effective_minor_units
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Display symbol of the balance's currency
    pub fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }

    /// Balance available to spend, in major units
    pub fn spendable(&self) -> f64 {
        self.effective_minor_units as f64 / MINOR_PER_MAJOR
    }

    /// Balance held in savings goals, in major units.
    /// Not checked for being non-negative.
    pub fn savings(&self) -> f64 {
        (self.total_effective_minor_units as f64 - self.effective_minor_units as f64) / MINOR_PER_MAJOR
    }
}

impl From<BalanceResponse> for BalanceSnapshot {
    fn from(resp: BalanceResponse) -> Self {
        BalanceSnapshot::new(
            resp.effective_balance.minor_units,
            resp.total_effective_balance.minor_units,
            Currency::from(resp.effective_balance.currency.as_str()),
        )
    }
}

impl TryFrom<&str> for BalanceSnapshot {
    type Error = DecodeError;

    fn try_from(body: &str) -> Result<Self, Self::Error> {
        let resp: BalanceResponse = decode_body(body, "balance")?;

        Ok(BalanceSnapshot::from(resp))
    }
}
