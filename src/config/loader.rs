use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::DemoConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl DemoConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/shared-state/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shared-state").join("config.toml")
    }

    /// Loads and validates configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from `path` without validating it, so callers
    /// can layer overrides before [`DemoConfig::validate`].
    ///
    /// - If the file doesn't exist, returns `DemoConfig::default()`.
    /// - If the file exists, parses it as TOML.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(DemoConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both producer intervals are non-zero
    /// - The temperature range is non-empty
    /// - At least one greeting is configured
    pub fn validate(&self) -> Result<(), ConfigError> {
        let producer = &self.producer;

        if producer.temperature_interval_ms == 0 || producer.greeting_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "Producer intervals must be greater than zero".to_string(),
            });
        }

        if producer.temperature_min >= producer.temperature_max {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Temperature range {}..{} is empty",
                    producer.temperature_min, producer.temperature_max
                ),
            });
        }

        if producer.greetings.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one greeting must be configured".to_string(),
            });
        }

        Ok(())
    }
}
