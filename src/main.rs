use std::io::{stderr, stdout, BufWriter};
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use bank_clients::app::{AppConfig, BankingApp};
use bank_clients::report::SystemClock;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: bank-clients [log_level:optional]");
        eprintln!("Log levels: off, error, warn, info, debug, trace (default: error)");
        std::process::exit(1);
    }

    // stdout carries the client listing; diagnostics go to stderr
    setup_logging(args.get(1).map_or(LevelFilter::ERROR, |level| parse_log_level(level)));

    let config = AppConfig::default();
    info!("Starting run with {config:?}");

    let mut app = BankingApp::new(config, rand::thread_rng(), SystemClock);
    let mut output = BufWriter::new(stdout().lock());

    let timer = Instant::now();
    app.run(&mut output)?;
    let duration = timer.elapsed();

    info!("Finished in: {duration:?}");

    Ok(())
}

/// Accepts any level name `tracing` understands (`off` through `trace`, any case).
fn parse_log_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|error| {
        eprintln!("Ignoring log level '{level}' ({error}), logging errors only");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(stderr).with_filter(level))
        .init();
}
