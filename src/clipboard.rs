//! Copy with fallback.
//!
//! Copying tries the primary clipboard first and the fallback second. Either
//! success is final; there is no retry.

use crate::traits::{ClipboardError, ClipboardSink};

/// Which clipboard accepted the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

/// Copy `text` to `primary`, falling back to `fallback` if that fails.
///
/// Returns the fallback's error when both fail.
pub fn copy_with_fallback(
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
    text: &str,
) -> Result<CopyPath, ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::Empty);
    }

    match primary.write_text(text) {
        Ok(()) => Ok(CopyPath::Primary),
        Err(primary_err) => {
            tracing::debug!(
                "{} clipboard failed ({}), trying {}",
                primary.name(),
                primary_err,
                fallback.name()
            );
            fallback.write_text(text).map(|_| CopyPath::Fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MemoryClipboard;

    #[test]
    fn test_primary_success_skips_fallback() {
        let mut primary = MemoryClipboard::new();
        let mut fallback = MemoryClipboard::new();
        let path = copy_with_fallback(&mut primary, &mut fallback, "a@b.c").unwrap();
        assert_eq!(path, CopyPath::Primary);
        assert_eq!(primary.contents().as_deref(), Some("a@b.c"));
        assert!(fallback.writes().is_empty());
    }

    #[test]
    fn test_primary_failure_uses_fallback() {
        let mut primary = MemoryClipboard::failing();
        let mut fallback = MemoryClipboard::new();
        let path = copy_with_fallback(&mut primary, &mut fallback, "a@b.c").unwrap();
        assert_eq!(path, CopyPath::Fallback);
        assert_eq!(fallback.contents().as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_both_failing_returns_error() {
        let mut primary = MemoryClipboard::failing();
        let mut fallback = MemoryClipboard::failing();
        assert!(copy_with_fallback(&mut primary, &mut fallback, "a@b.c").is_err());
    }

    #[test]
    fn test_empty_text_is_rejected_up_front() {
        let mut primary = MemoryClipboard::new();
        let mut fallback = MemoryClipboard::new();
        assert_eq!(
            copy_with_fallback(&mut primary, &mut fallback, ""),
            Err(ClipboardError::Empty)
        );
        assert!(primary.writes().is_empty());
    }
}
