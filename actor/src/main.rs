//! haunt - runs one ghost hunt and reports the outcome
//!
//! A short-lived process that:
//! 1. Builds the standard house and the hunting party
//! 2. Runs the ghost and every hunter on their own threads
//! 3. Writes every hunt event to the output file (and stdout)
//! 4. Prints a summary, or the full report as JSON with `--json`

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use haunt_core::{EventSink, FanoutSink, House, Hunt, TracingSink};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{error, info};

mod config;
mod event_log;
mod report;

use crate::config::Config;
use crate::event_log::EventLog;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the event echo and the report.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let seed = config.resolved_seed();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let roster = config.roster(&mut rng)?;
    let house = Arc::new(House::build()?);
    info!(
        seed,
        hunters = roster.len(),
        rooms = house.len(),
        output = %config.output_path,
        "Preparing hunt"
    );

    // With --json stdout is reserved for the report, so events go to tracing instead.
    let log = Arc::new(EventLog::create(&config.output_path, !config.json)?);
    let mut sink = FanoutSink::new().with(log.clone());
    if config.json {
        sink = sink.with(Arc::new(TracingSink));
    }
    let sink: Arc<dyn EventSink> = Arc::new(sink);

    let hunt = Hunt::new(house, &roster, config.ghost, config.rules(), seed, sink)?;
    let report = hunt.run()?;
    log.flush()?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let summary = report::render(&report)?;
        print!("{}", summary);
        log.append(&summary)?;
    }

    info!(
        hunters_won = report.hunters_won,
        collected = report.collected.len(),
        "Hunt complete"
    );
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");
    let (source, overrides) = config::central_source();
    info!(source = %source, overrides = ?overrides, "Central config loaded");

    match run(&config) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Hunt failed: {}", e);
            Err(e)
        }
    }
}
