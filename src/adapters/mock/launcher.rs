//! Recording launcher for tests.

use std::sync::{Arc, Mutex};

use crate::traits::{LaunchError, Launcher};

/// Launcher that records targets instead of opening them.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    launched: Arc<Mutex<Vec<String>>>,
    fail: Arc<Mutex<bool>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Targets launched so far, oldest first. Failed launches are included.
    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }

    pub fn count(&self, target: &str) -> usize {
        self.launched
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.as_str() == target)
            .count()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, target: &str) -> Result<(), LaunchError> {
        self.launched.lock().unwrap().push(target.to_string());
        if *self.fail.lock().unwrap() {
            return Err(LaunchError::Failed {
                target: target.to_string(),
                message: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}
