mod ui;

use anyhow::{Context, Result};
use nbtrace::report::DerivationTrace;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::ui::cli::drivers::InquireDriver;
use crate::ui::cli::wizard::run_wizard;
use crate::ui::types::build::build_sample;
use crate::ui::types::choices::{OutputFormat, RunConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => RunConfig::load(&path)?,
        None => run_wizard(&InquireDriver)?,
    };
    debug!(?config, "run configuration");

    let sample = build_sample(&config)?;
    let outcome = sample
        .evaluate()
        .with_context(|| format!("failed to evaluate '{}'", sample.title))?;

    match config.format {
        OutputFormat::Text => {
            let trace = DerivationTrace::new(&sample.dataset, &outcome).with_title(sample.title);
            println!("{trace}");
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }
    Ok(())
}
