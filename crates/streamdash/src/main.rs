//! Main entry point for StreamDash.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use streamdash::{execute, load_config, Args};
use streamdash_common::init_logging;
use streamdash_data::EventStore;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(&args).context("Failed to load configuration")?;
    init_logging(config.logging.to_logging_config())?;

    info!(data = %config.data.path, "Starting StreamDash");

    let store = EventStore::from_path(&config.data.path)
        .with_context(|| format!("Failed to load dataset from {}", config.data.path))?;
    let store = EventStore::init_global(store)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args, &config, store, &mut out)?;
    out.flush()?;

    Ok(())
}
