//! Concrete implementations of the traits in [`crate::traits`].
//!
//! - [`SystemClipboard`] - OS clipboard through `arboard`
//! - [`Osc52Clipboard`] - terminal clipboard escape sequence, used as fallback
//! - [`SystemLauncher`] - default browser / file handler through `open`
//! - [`mock`] - recording doubles for tests

pub mod mock;
mod open_launcher;
mod osc52;
mod system_clipboard;

pub use open_launcher::SystemLauncher;
pub use osc52::{osc52_sequence, Osc52Clipboard};
pub use system_clipboard::SystemClipboard;
