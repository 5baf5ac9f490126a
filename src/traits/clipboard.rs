//! Clipboard trait.

use thiserror::Error;

/// Errors from a clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The clipboard could not be opened
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard was opened but the write failed
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
    /// Nothing to copy
    #[error("nothing to copy")]
    Empty,
}

/// Something text can be copied into.
pub trait ClipboardSink {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
