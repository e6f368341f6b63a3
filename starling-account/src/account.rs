//! Accounts belonging to the authenticated user.

use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt::Display;

use crate::parse::{decode_body, null_as_default};
use crate::DecodeError;

/// A single account, as listed by the provider
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Account {
    #[serde(rename = "accountUid", default, deserialize_with = "null_as_default")]
    uid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
}

impl Account {
    /// Declare a new Account
    pub fn new(uid: &str, name: &str) -> Self {
        Account {
            uid: uid.to_string(),
            name: name.to_string(),
        }
    }

    /// Return the provider-assigned identifier of the account
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Return the display name of the account
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.uid)
    }
}

/// Body of the account listing endpoint.
/// An absent or `null` `accounts` field is an empty listing.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct AccountList {
    #[serde(default, deserialize_with = "null_as_default")]
    accounts: Vec<Account>,
}

impl AccountList {
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn into_accounts(self) -> Vec<Account> {
        self.accounts
    }
}

impl TryFrom<&str> for AccountList {
    type Error = DecodeError;

    fn try_from(body: &str) -> Result<Self, Self::Error> {
        decode_body(body, "accounts")
    }
}
