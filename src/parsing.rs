//! CSV deserialization of the account export.
//!
//! Parsing happens in two stages:
//! 1. Serde deserializes each CSV row into a flat `CsvAccount`, with the
//!    balance and creation date still as raw text.
//! 2. `TryFrom<CsvAccount>` converts it into the strongly-typed domain `Account`.
//!
//! The first malformed row aborts the whole import; no partial account list
//! is ever returned.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Account, AccountId, AccountType, Currency};

const CREATED_AT_FORMAT: &str = "%Y-%m-%d";

/// Flat representation of a single CSV row. `balance` and `created_at` stay
/// raw here so that a malformed field surfaces as a [`ParseError`] naming the
/// offending value instead of an opaque csv error.
#[derive(Debug, Clone, Deserialize)]
struct CsvAccount {
    #[serde(rename = "AccountID")]
    account_id: AccountId,
    #[serde(rename = "AccountHolderName")]
    account_holder_name: String,
    #[serde(rename = "Balance")]
    balance: String,
    #[serde(rename = "Currency")]
    currency: Currency,
    #[serde(rename = "Type")]
    account_type: AccountType,
    #[serde(rename = "CreatedAt")]
    created_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid balance {value:?}")]
    InvalidBalance {
        value: String,
        source: rust_decimal::Error,
    },
    #[error("invalid creation date {value:?}, expected YYYY-MM-DD")]
    InvalidCreatedAt {
        value: String,
        source: chrono::ParseError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("could not open accounts file")]
    Io(#[from] std::io::Error),
    #[error("could not read account row")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TryFrom<CsvAccount> for Account {
    type Error = ParseError;

    fn try_from(value: CsvAccount) -> Result<Self, Self::Error> {
        let balance =
            value
                .balance
                .parse::<Decimal>()
                .map_err(|source| ParseError::InvalidBalance {
                    value: value.balance.clone(),
                    source,
                })?;
        let created_at = NaiveDate::parse_from_str(&value.created_at, CREATED_AT_FORMAT).map_err(
            |source| ParseError::InvalidCreatedAt {
                value: value.created_at.clone(),
                source,
            },
        )?;
        Ok(Account::new(
            value.account_id,
            value.account_holder_name,
            balance,
            value.currency,
            value.account_type,
            created_at,
        ))
    }
}

/// Deserializes every CSV row into a domain account, preserving row order.
/// The header row is consumed by the reader and never treated as data.
pub fn read_accounts<D: std::io::Read>(
    reader: &mut csv::Reader<D>,
) -> Result<Vec<Account>, ReadError> {
    let mut accounts = Vec::new();
    for row in reader.deserialize::<CsvAccount>() {
        accounts.push(Account::try_from(row?)?);
    }
    Ok(accounts)
}

/// Opens `path` and reads the whole export. Fails up front if the file
/// cannot be opened, before any row is parsed.
pub fn read_accounts_from_path(path: impl AsRef<Path>) -> Result<Vec<Account>, ReadError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    read_accounts(&mut reader)
}
