//! OS clipboard access through `arboard`.

use crate::traits::{ClipboardError, ClipboardSink};

/// The system clipboard.
///
/// The `arboard` handle is opened lazily and then kept alive: on X11 the
/// copied text is served by the owning process and disappears when the handle
/// is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialized".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
