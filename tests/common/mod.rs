use balance_report::domain::{Account, AccountType, Currency};
use balance_report::engine::ReportEngine;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn run(accounts: Vec<Account>) -> ReportEngine {
    let mut engine = ReportEngine::new();
    engine.aggregate_accounts(accounts.into_iter());
    engine
}

#[allow(dead_code)]
pub fn account(id: &str, balance: Decimal, currency: Currency, created_at: &str) -> Account {
    Account::new(
        id.into(),
        format!("Holder {id}"),
        balance,
        currency,
        AccountType::Checking,
        date(created_at),
    )
}

#[allow(dead_code)]
pub fn date(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}
