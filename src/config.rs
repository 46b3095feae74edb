//! Combined configuration.
//!
//! Settings are read from a TOML document and then overridden by
//! environment variables:
//!
//! ```toml
//! [evidence]
//! capacity = 64
//!
//! [properties]
//! separators = [",", "|"]
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evidence::EvidenceStoreConfig;
use crate::properties::PropertiesConfig;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error while reading a config file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The document is not valid TOML for this configuration.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A setting parsed but has an unusable value.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration for every component of the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub evidence: EvidenceStoreConfig,
    pub properties: PropertiesConfig,
}

impl CoreConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Parse a TOML document. Missing sections keep their defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Override fields from environment variables.
    pub fn apply_env(&mut self) {
        self.evidence.apply_env();
        self.properties.apply_env();
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.properties.separators.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "properties.separators",
                value: "[]".to_string(),
            });
        }
        Ok(())
    }
}
