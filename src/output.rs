//! Serializes aggregated totals to a CSV report.

use std::fs::File;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Currency, Year};
use crate::engine::YearlyTotals;

/// Number of fraction digits every reported sum is rendered with.
const REPORT_SCALE: u32 = 2;

const HEADER: [&str; 3] = ["Year", "Currency", "Sum of Balances"];

/// One line of the report: the aggregation key plus its rescaled sum.
#[derive(Debug, Serialize)]
struct ReportRow {
    year: Year,
    currency: Currency,
    sum_of_balances: Decimal,
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("could not create report file")]
    Io(#[from] std::io::Error),
    #[error("could not write report row")]
    Csv(#[from] csv::Error),
}

/// Writes the report, one row per (year, currency) bucket, in unspecified
/// row order. Consumers that need a stable order must sort the output.
pub fn write_report(
    yearly_totals: &YearlyTotals,
    writer: impl std::io::Write,
) -> Result<(), WriteError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    // The header is written explicitly: serde would only emit it together
    // with the first row, and an empty report must still carry it.
    wtr.write_record(HEADER)?;
    for (year, currencies) in yearly_totals.as_map() {
        for (currency, sum) in currencies.as_map() {
            let mut sum_of_balances = *sum;
            sum_of_balances.rescale(REPORT_SCALE);
            wtr.serialize(ReportRow {
                year: *year,
                currency: currency.clone(),
                sum_of_balances,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Creates `path` (overwriting any existing file) and writes the report
/// into it.
pub fn write_report_to_path(
    path: impl AsRef<Path>,
    yearly_totals: &YearlyTotals,
) -> Result<(), WriteError> {
    let file = File::create(path)?;
    write_report(yearly_totals, file)
}
