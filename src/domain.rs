//! Core domain types: accounts, currencies, and aggregation keys.

use chrono::{Datelike, NaiveDate};
use derive_more::{From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Newtype wrapper for the opaque per-row account identifier. Uniqueness is
/// not enforced; the value is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into)]
pub struct AccountId(String);

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Newtype wrapper for the calendar year an account was created in - one half
/// of the aggregation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, From, Into)]
pub struct Year(i32);

/// Currency code of an account balance - the other half of the aggregation key.
///
/// The export is not validated against the known set: codes other than USD
/// and EUR are preserved verbatim in [`Currency::Other`] instead of failing
/// the import, and each unknown code forms its own aggregation bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Usd,
    Eur,
    Other(String),
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        match code.as_str() {
            "USD" => Currency::Usd,
            "EUR" => Currency::Eur,
            _ => {
                warn!("unknown currency code {code:?}, carrying it through");
                Currency::Other(code)
            }
        }
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        match currency {
            Currency::Usd => "USD".to_owned(),
            Currency::Eur => "EUR".to_owned(),
            Currency::Other(code) => code,
        }
    }
}

/// Kind of bank account. Both the `Saving` and `Savings` spellings occur in
/// exports and fold into one variant; unknown kinds are carried through like
/// unknown [`Currency`] codes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AccountType {
    Checking,
    Saving,
    Other(String),
}

impl From<String> for AccountType {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "Checking" => AccountType::Checking,
            "Saving" | "Savings" => AccountType::Saving,
            _ => {
                warn!("unknown account type {kind:?}, carrying it through");
                AccountType::Other(kind)
            }
        }
    }
}

/// One parsed row of the account export. Immutable once constructed; only
/// the reader creates accounts, the aggregator consumes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub account_id: AccountId,
    pub account_holder_name: String,
    pub balance: Decimal,
    pub currency: Currency,
    pub account_type: AccountType,
    pub created_at: NaiveDate,
}

impl Account {
    pub fn new(
        account_id: AccountId,
        account_holder_name: String,
        balance: Decimal,
        currency: Currency,
        account_type: AccountType,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            account_id,
            account_holder_name,
            balance,
            currency,
            account_type,
            created_at,
        }
    }

    /// The calendar year this account was created in.
    pub fn creation_year(&self) -> Year {
        Year(self.created_at.year())
    }
}
