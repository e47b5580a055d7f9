use std::path::PathBuf;

use clap::Parser;

use balance_report::engine::ReportEngine;
use balance_report::output;
use balance_report::parsing;

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    if let Some(log_level) = args.log_level {
        tracing_subscriber::fmt().with_max_level(log_level).init();
    }

    let accounts = parsing::read_accounts_from_path(&args.input_path)?;

    let mut engine = ReportEngine::new();
    engine.aggregate_accounts(accounts.into_iter());

    output::write_report_to_path(&args.output_path, engine.yearly_totals())?;

    Ok(())
}

#[derive(Parser)]
struct Arguments {
    /// Account export to aggregate.
    #[arg(default_value = "assets/accounts.csv")]
    input_path: PathBuf,
    /// Destination for the report; overwritten if it already exists.
    #[arg(default_value = "assets/sum_balances.csv")]
    output_path: PathBuf,
    #[arg(long)]
    log_level: Option<tracing::Level>,
}
