//! OS integrations the application talks to.

use std::fmt;

use crate::adapters::{Osc52Clipboard, SystemClipboard, SystemLauncher};
use crate::traits::{ClipboardSink, Launcher};

/// Launcher and clipboards behind trait objects, so tests can swap in the
/// recording doubles from [`crate::adapters::mock`].
pub struct Platform {
    pub launcher: Box<dyn Launcher>,
    pub clipboard: Box<dyn ClipboardSink>,
    pub clipboard_fallback: Box<dyn ClipboardSink>,
}

impl Platform {
    pub fn new(
        launcher: impl Launcher + 'static,
        clipboard: impl ClipboardSink + 'static,
        clipboard_fallback: impl ClipboardSink + 'static,
    ) -> Self {
        Self {
            launcher: Box::new(launcher),
            clipboard: Box::new(clipboard),
            clipboard_fallback: Box::new(clipboard_fallback),
        }
    }

    /// Browser via `open`, OS clipboard with an OSC 52 fallback.
    pub fn system() -> Self {
        Self::new(
            SystemLauncher,
            SystemClipboard::new(),
            Osc52Clipboard::stdout(),
        )
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform")
            .field("clipboard", &self.clipboard.name())
            .field("clipboard_fallback", &self.clipboard_fallback.name())
            .finish_non_exhaustive()
    }
}
