//! File logging.
//!
//! The TUI owns stdout, so log output goes to a file. `FOLIO_LOG` sets the
//! filter (`EnvFilter` syntax, default `folio=info`) and `FOLIO_LOG_DIR` the
//! directory (default: `<data dir>/folio`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_ENV_VAR: &str = "FOLIO_LOG";
pub const LOG_DIR_ENV_VAR: &str = "FOLIO_LOG_DIR";
const DEFAULT_FILTER: &str = "folio=info";
const LOG_FILE_NAME: &str = "folio.log";

/// Directory the log file is written to.
pub fn log_dir() -> Option<PathBuf> {
    std::env::var_os(LOG_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::data_local_dir().map(|dir| dir.join("folio")))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Returns the log file path on success.
///
/// Failures (no writable directory, subscriber already set) leave logging
/// disabled and are otherwise ignored.
pub fn init_logging() -> Option<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .ok()?;

    tracing::info!("folio {} started", env!("CARGO_PKG_VERSION"));
    Some(path)
}
