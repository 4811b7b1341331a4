//! Storage file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default storage file, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "pets.json";

fn default_path() -> String {
    DEFAULT_STORAGE_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding every pet record.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StorageConfig {
    /// The storage path as a `PathBuf`.
    #[must_use]
    pub fn path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    /// Reject an empty path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `path` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pets_json() {
        let config = StorageConfig::default();
        assert_eq!(config.path, "pets.json");
        assert_eq!(config.path_buf(), PathBuf::from("pets.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_path_is_invalid() {
        let config = StorageConfig {
            path: "  ".into(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "storage.path"
        ));
    }
}
