//! Launcher backed by the `open` crate.

use crate::traits::{LaunchError, Launcher};

/// Opens targets with the platform handler (`xdg-open`, `open`, `start`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, target: &str) -> Result<(), LaunchError> {
        open::that(target).map_err(|e| LaunchError::Failed {
            target: target.to_string(),
            message: e.to_string(),
        })
    }
}
