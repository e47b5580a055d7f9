mod common;

use balance_report::domain::Currency;
use balance_report::engine::YearlyTotals;
use balance_report::output::{self, WriteError};
use common::{account, run};
use rust_decimal::dec;

/// Writing an empty result yields a file containing only the header line.
#[test]
fn empty_totals_produce_only_the_header() {
    let mut buf = Vec::new();

    output::write_report(&YearlyTotals::new(), &mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Year,Currency,Sum of Balances\n"
    );
}

/// Sums are rendered with exactly two fraction digits, padding with zeros
/// where the exact sum carries fewer.
#[test]
fn sums_are_rendered_with_two_fraction_digits() {
    let engine = run(vec![account("1", dec!(1000.5), Currency::Usd, "2022-01-01")]);
    let mut buf = Vec::new();

    output::write_report(engine.yearly_totals(), &mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Year,Currency,Sum of Balances\n2022,USD,1000.50\n"
    );
}

/// One row is written per (year, currency) bucket. Row order is unspecified,
/// so the lines are sorted before comparison.
#[test]
fn writes_one_row_per_bucket() {
    let engine = run(vec![
        account("1", dec!(1000.50), Currency::Usd, "2022-01-01"),
        account("2", dec!(2000.75), Currency::Eur, "2021-06-15"),
        account("3", dec!(1500.00), Currency::Usd, "2022-03-10"),
    ]);
    let mut buf = Vec::new();

    output::write_report(engine.yearly_totals(), &mut buf).unwrap();

    let report = String::from_utf8(buf).unwrap();
    let mut lines: Vec<&str> = report.lines().collect();
    lines.sort_unstable();
    assert_eq!(
        lines,
        vec![
            "2021,EUR,2000.75",
            "2022,USD,2500.50",
            "Year,Currency,Sum of Balances",
        ]
    );
}

/// Unknown currency codes round-trip to the report verbatim.
#[test]
fn unknown_currency_codes_are_written_verbatim() {
    let engine = run(vec![account(
        "1",
        dec!(10.00),
        Currency::Other("GBP".to_owned()),
        "2020-05-05",
    )]);
    let mut buf = Vec::new();

    output::write_report(engine.yearly_totals(), &mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Year,Currency,Sum of Balances\n2020,GBP,10.00\n"
    );
}

/// A destination that cannot be created fails with an I/O error.
#[test]
fn unwritable_destination_fails_with_io_error() {
    let engine = run(vec![account("1", dec!(1.00), Currency::Usd, "2022-01-01")]);

    let err = output::write_report_to_path("does/not/exist/report.csv", engine.yearly_totals())
        .unwrap_err();

    assert!(matches!(err, WriteError::Io(_)));
}
