//! Startup: configuration loading and logging setup.

pub mod config;
pub mod logging;

pub use config::{FolioConfig, CONFIG_ENV_VAR};
pub use logging::init_logging;
