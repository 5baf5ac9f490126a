//! Trait abstractions over OS integrations.
//!
//! The application only talks to the clipboard and the browser through these
//! traits, so tests can swap in the recording doubles from
//! [`crate::adapters::mock`].
//!
//! # Traits
//!
//! - [`ClipboardSink`] - write-only clipboard access
//! - [`Launcher`] - open a URL or file with the system handler

pub mod clipboard;
pub mod launcher;

pub use clipboard::{ClipboardError, ClipboardSink};
pub use launcher::{LaunchError, Launcher};
