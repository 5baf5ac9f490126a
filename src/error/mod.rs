//! Error types for folio.
//!
//! Failures in this application are shallow: a bad config file, a duplicate
//! command id, a clipboard or browser launch that didn't work, or a terminal
//! I/O error. [`FolioError`] unifies them and classifies each one with an
//! [`ErrorCategory`] so callers can decide whether to keep running.
//!
//! | Category      | Examples                          | Recoverable |
//! |---------------|-----------------------------------|-------------|
//! | Configuration | unreadable or malformed config    | No          |
//! | Platform      | clipboard, browser launch         | Yes         |
//! | System        | terminal I/O                      | No          |

use std::path::PathBuf;

use thiserror::Error;

use crate::commands::RegistryError;
use crate::traits::{ClipboardError, LaunchError};

/// High-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The user's configuration is wrong
    Configuration,
    /// An OS integration (clipboard, browser) failed
    Platform,
    /// Terminal or filesystem failure
    System,
}

/// Unified error type.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::ConfigRead { .. }
            | FolioError::ConfigParse { .. }
            | FolioError::InvalidConfig(_)
            | FolioError::Registry(_) => ErrorCategory::Configuration,
            FolioError::Clipboard(_) | FolioError::Launch(_) => ErrorCategory::Platform,
            FolioError::Terminal(_) => ErrorCategory::System,
        }
    }

    /// Whether the UI can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Platform
    }

    /// Short message suitable for a notification or stderr.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::ConfigRead { path, .. } => {
                format!("Could not read {}. Check the path and permissions.", path.display())
            }
            FolioError::ConfigParse { path, source } => {
                format!("{} is not valid JSON: {}", path.display(), source)
            }
            FolioError::InvalidConfig(message) => format!("Invalid config: {}", message),
            FolioError::Registry(err) => format!("Invalid command list: {}", err),
            FolioError::Clipboard(_) => "Could not access the clipboard.".to_string(),
            FolioError::Launch(LaunchError::Failed { target, .. }) => {
                format!("Could not open {}", target)
            }
            FolioError::Terminal(_) => {
                "Terminal error. You may need to reset your terminal.".to_string()
            }
        }
    }
}

/// Result alias used across the library.
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommandId;

    #[test]
    fn test_categories() {
        let err = FolioError::InvalidConfig("no sections".to_string());
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.is_recoverable());

        let err: FolioError = LaunchError::Failed {
            target: "https://example.com".to_string(),
            message: "no browser".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Platform);
        assert!(err.is_recoverable());

        let err: FolioError = std::io::Error::other("tty gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_registry_error_converts() {
        let err: FolioError = RegistryError::DuplicateId(CommandId::new("about")).into();
        assert!(err.user_message().contains("about"));
    }

    #[test]
    fn test_launch_user_message_names_target() {
        let err: FolioError = LaunchError::Failed {
            target: "resume.pdf".to_string(),
            message: "missing".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "Could not open resume.pdf");
    }
}
