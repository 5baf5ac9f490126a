//! OSC 52 clipboard writes.
//!
//! Most modern terminals (and tmux with `set-clipboard on`) accept an
//! `ESC ] 52 ; c ; <base64> BEL` sequence and put the decoded text on the
//! local clipboard. This works over SSH where `arboard` has no display to
//! talk to, which makes it the fallback path.

use std::io::Write;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::traits::{ClipboardError, ClipboardSink};

/// Build the OSC 52 sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text.as_bytes()))
}

/// Clipboard that writes OSC 52 sequences to a terminal writer.
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        self.writer
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
