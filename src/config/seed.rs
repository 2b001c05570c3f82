//! Fixture seeding configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Optional fixture files loaded at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// YAML file of goals to create on boot
    #[serde(default)]
    pub goals_file: Option<PathBuf>,
}

impl SeedConfig {
    pub fn goals_file(&self) -> Option<&Path> {
        self.goals_file.as_deref()
    }

    /// Validate seed configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = self.goals_file() {
            if !path.is_file() {
                return Err(ValidationError::SeedFileNotFound(path.display().to_string()));
            }
        }
        Ok(())
    }
}
