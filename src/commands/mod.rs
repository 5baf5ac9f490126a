//! The command registry: every action the palette can run.

mod registry;

pub use registry::{
    CommandRegistry, RegistryError, BUILTIN_COMMAND_IDS, CATEGORY_ACTIONS, CATEGORY_EXTERNAL, CATEGORY_NAVIGATION,
    CATEGORY_PROJECTS,
};
