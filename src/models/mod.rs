//! Data models for the portfolio.
//!
//! These are plain data types shared by the registry, the view state and the
//! renderer. They carry no UI logic.

pub mod command;
pub mod profile;
pub mod section;

pub use command::{Action, Command, CommandId};
pub use profile::{Profile, Project};
pub use section::{Section, SectionId};
