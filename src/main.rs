mod cli;

use std::env;
use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;

use anyhow::Result;
use finance_tracker::models::CategoryRegistry;
use finance_tracker::storage::FileStorage;
use finance_tracker::store::TransactionStore;
use finance_tracker::types::Month;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{Command, USAGE};

const LOG_LEVEL_VARIABLE: &str = "FINANCE_TRACKER_LOG";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("{USAGE}");
        exit(1);
    }

    let log_level = env::var(LOG_LEVEL_VARIABLE)
        .map(|level| parse_log_level(&level))
        .unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let registry = CategoryRegistry::default();
    let command = Command::parse(&args[2..], Month::current(), &registry)?;

    let storage = Arc::new(FileStorage::open(&args[1])?);
    let mut store = TransactionStore::open(storage);

    let mut output = BufWriter::new(stdout().lock());
    cli::run(command, &mut store, &registry, &mut output)?;
    output.flush()?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // stdout carries the CSV output
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
