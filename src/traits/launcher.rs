//! Launcher trait for URLs and files.

use thiserror::Error;

/// Error launching an external target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("failed to open {target}: {message}")]
    Failed { target: String, message: String },
}

/// Opens URLs and files with the system's default handler.
pub trait Launcher {
    fn launch(&self, target: &str) -> Result<(), LaunchError>;
}
