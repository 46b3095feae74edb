use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable listing the separators of a delimited property list.
///
/// Every character of the value is a separator, e.g. `",|"`.
pub const SEPARATORS_ENV_VAR: &str = "DETECTION_PROPERTY_SEPARATORS";

/// Default separators of a delimited property list.
pub const DEFAULT_SEPARATORS: [char; 2] = [',', '|'];

/// Configuration for required-property resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertiesConfig {
    /// Characters that split a delimited property list.
    pub separators: Vec<char>,
}

impl PropertiesConfig {
    /// Create a config splitting lists on `separators`.
    pub fn new(separators: impl IntoIterator<Item = char>) -> Self {
        Self {
            separators: separators.into_iter().collect(),
        }
    }

    /// Build config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from environment variables. Empty values are ignored.
    pub fn apply_env(&mut self) {
        if let Ok(value) = env::var(SEPARATORS_ENV_VAR) {
            if !value.is_empty() {
                self.separators = value.chars().collect();
            }
        }
    }

    /// Whether `c` splits a delimited list.
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}
