//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> KeyboardRouter::route() -> RouterAction -> App::apply()
//! ```
//!
//! - [`keybindings`] - [`KeyCombo`] and the default binding tables
//! - [`router`] - [`KeyboardRouter`] and the [`RouterAction`] it yields

pub mod keybindings;
pub mod router;

pub use keybindings::{KeyCombo, KeybindingConfig};
pub use router::{KeyboardRouter, PaletteKey, RouteContext, RouterAction, ScrollMotion};
