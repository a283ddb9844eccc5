//! Top-level tortus configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ObservabilityConfig, SessionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TORTUS_*`)
/// 2. Config file (`tortus.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TortusConfig {
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl TortusConfig {
    /// Load configuration from `tortus.toml` in `root` (if present), then
    /// apply environment overrides and validate.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(defaults::CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without env overrides or validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()
    }

    /// Apply environment variable overrides.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("TORTUS_TEXT_COLUMN") {
            self.session.text_column = val;
        }
        if let Ok(val) = std::env::var("TORTUS_ID_COLUMN") {
            self.session.id_column = Some(val);
        }
        if let Ok(val) = std::env::var("TORTUS_RECORD_COUNT") {
            if let Ok(v) = val.parse::<usize>() {
                self.session.record_count = v;
            }
        }
        if let Ok(val) = std::env::var("TORTUS_RANDOMIZE") {
            if let Ok(v) = val.parse::<bool>() {
                self.session.randomize = v;
            }
        }
        if let Ok(val) = std::env::var("TORTUS_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                self.session.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TORTUS_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
