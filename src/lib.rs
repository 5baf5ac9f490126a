//! folio - a terminal portfolio with a file-explorer layout and a command
//! palette.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod error;
pub mod input;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
