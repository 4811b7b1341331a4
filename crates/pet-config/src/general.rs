//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn default_log_level() -> String {
    "warn".to_string()
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Log level used when neither `PETSTORE_LOG` nor `--quiet`/`--verbose` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print JSON responses unless `--format raw` is given.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: default_pretty(),
        }
    }
}

impl GeneralConfig {
    /// Reject log levels the subscriber would not understand.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown `log_level`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".into(),
                reason: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
