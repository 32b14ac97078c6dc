use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LOG_ENV;

pub(crate) const LOG_FILE: &str = "finboard.log";

/// Send logs to `finboard.log` in the data directory. The terminal belongs to
/// the TUI, so nothing goes to stdout or stderr.
///
/// `FINBOARD_LOG` wins over the configured filter.
pub(crate) fn init(data_dir: &Path, default_filter: &str) -> Result<()> {
    let path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Arc::new(file)),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(())
}
