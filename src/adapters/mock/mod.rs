//! Test doubles for the platform traits.
//!
//! Both doubles are cheap to clone and share their recorded state, so a test
//! can hand one clone to the [`App`](crate::app::App) and keep another to
//! inspect what happened.
//!
//! - [`MemoryClipboard`] - records copied text, optionally failing
//! - [`RecordingLauncher`] - records launched targets, optionally failing

pub mod clipboard;
pub mod launcher;

pub use clipboard::MemoryClipboard;
pub use launcher::RecordingLauncher;
