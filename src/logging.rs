// src/logging.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter: everything from this crate at DEBUG, HTTP internals at WARN.
pub const DEFAULT_FILTER: &str = "debug,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn";

/// Log to stdout and append to `log_path`, timestamps in UTC.
/// `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}
