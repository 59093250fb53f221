//! Logging setup for the terminal binary.
//!
//! The game owns the terminal (raw mode, alternate screen), so log records
//! can't go to stderr. They are written to the file named by the config, and
//! logging stays off when no file is configured. `RUST_LOG` selects the level
//! (default `info`).

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

/// Install the global logger. Returns whether a log file is in use.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;

    log::info!("logging to {}", path.display());
    Ok(true)
}
