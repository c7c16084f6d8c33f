use std::fs::File;

use anyhow::{Context, Result};
use bank_account::{
    bin_utils::{RowError, Service, config::Config},
    processor::{OperationProcessError, statement_processor::StatementProcessor},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_args(std::env::args().skip(1))
        .with_context(|| format!("Usage: bank-account {}", Config::USAGE))?;
    let file = File::open(&config.input)
        .with_context(|| format!("Failed to open `{}`", config.input.display()))?;

    let account = config.account.open()?;
    let processor = match &config.counterparty {
        Some(counterparty) => StatementProcessor::with_counterparty(account, counterparty.open()?),
        None => StatementProcessor::new(account),
    };
    tracing::info!(input = %config.input.display(), "replaying operations");

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        processor,
        error_printer: Box::new(|line, err| match err {
            RowError::Process(OperationProcessError::AccountErr(err)) => {
                // rejected operations are business outcomes, not technical errors
                tracing::info!(line, "operation rejected: {err}");
            }
            err => eprintln!("Error at line {line}: {err}"),
        }),
    };
    service.run()
}
