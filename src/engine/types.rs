use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::{Currency, Year};

/// Balance totals for a single year, keyed by currency. An entry exists only
/// if at least one account contributed to it.
#[derive(Debug, PartialEq)]
pub struct CurrencyTotals(HashMap<Currency, Decimal>);

impl Default for CurrencyTotals {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyTotals {
    pub fn new() -> Self {
        Self(HashMap::new())
    }
    pub fn as_map(&self) -> &HashMap<Currency, Decimal> {
        &self.0
    }
    pub fn get(&self, currency: &Currency) -> Option<Decimal> {
        self.0.get(currency).copied()
    }
    pub(crate) fn add(&mut self, currency: Currency, amount: Decimal) {
        *self.0.entry(currency).or_default() += amount;
    }
}

/// The aggregation result: per-year, per-currency balance sums. Sums are
/// accumulated exactly; rounding happens only when a report is serialized.
#[derive(Debug, PartialEq)]
pub struct YearlyTotals(HashMap<Year, CurrencyTotals>);

impl Default for YearlyTotals {
    fn default() -> Self {
        Self::new()
    }
}

impl YearlyTotals {
    pub fn new() -> Self {
        Self(HashMap::new())
    }
    pub fn as_map(&self) -> &HashMap<Year, CurrencyTotals> {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, year: Year, currency: &Currency) -> Option<Decimal> {
        self.0.get(&year).and_then(|totals| totals.get(currency))
    }
    pub(crate) fn add(&mut self, year: Year, currency: Currency, amount: Decimal) {
        self.0.entry(year).or_default().add(currency, amount);
    }
}
