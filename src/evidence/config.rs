use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable for the evidence store capacity.
pub const CAPACITY_ENV_VAR: &str = "DETECTION_EVIDENCE_CAPACITY";

/// Default number of pairs a store accepts.
pub const DEFAULT_CAPACITY: usize = 32;

/// Configuration for evidence stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceStoreConfig {
    /// Maximum number of pairs per store.
    pub capacity: usize,
}

impl EvidenceStoreConfig {
    /// Create a new config with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Build config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::new(DEFAULT_CAPACITY);
        config.apply_env();
        config
    }

    /// Override fields from environment variables. Unparseable values are ignored.
    pub fn apply_env(&mut self) {
        if let Some(capacity) = env::var(CAPACITY_ENV_VAR)
            .ok()
            .and_then(|value| value.trim().parse::<usize>().ok())
        {
            self.capacity = capacity;
        }
    }
}

impl Default for EvidenceStoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(EvidenceStoreConfig::default().capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_deserialize_missing_fields_use_defaults() {
        let config: EvidenceStoreConfig = toml::from_str("").expect("config");
        assert_eq!(config, EvidenceStoreConfig::default());

        let config: EvidenceStoreConfig = toml::from_str("capacity = 8").expect("config");
        assert_eq!(config.capacity, 8);
    }
}
