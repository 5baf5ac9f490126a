//! In-memory clipboard for tests.

use std::sync::{Arc, Mutex};

use crate::traits::{ClipboardError, ClipboardSink};

/// Clipboard that stores every write in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: Arc<Mutex<bool>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail.
    pub fn failing() -> Self {
        let clipboard = Self::new();
        clipboard.set_should_fail(true);
        clipboard
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// All successful writes, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn contents(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if *self.fail.lock().unwrap() {
            return Err(ClipboardError::Unavailable("mock failure".to_string()));
        }
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_writes() {
        let clipboard = MemoryClipboard::new();
        let mut handle = clipboard.clone();
        handle.write_text("one").unwrap();
        handle.write_text("two").unwrap();
        assert_eq!(clipboard.writes(), vec!["one", "two"]);
        assert_eq!(clipboard.contents().as_deref(), Some("two"));
    }

    #[test]
    fn test_failing_clipboard() {
        let mut clipboard = MemoryClipboard::failing();
        assert!(clipboard.write_text("x").is_err());
        assert!(clipboard.writes().is_empty());
    }
}
