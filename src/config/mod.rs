//! Configuration loading and management

use crate::core::error::{ConfigError, ConsoleResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Budget backing the dashboard's "remaining" card
    #[serde(default = "default_budget")]
    pub budget: f64,

    /// Populate the collections with the demo data at startup
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

fn default_budget() -> f64 {
    100_000.0
}

fn default_seed() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            seed_demo_data: default_seed(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConsoleResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ConsoleResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.budget, 100_000.0);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ConsoleConfig {
            budget: 50_000.0,
            seed_demo_data: false,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = ConsoleConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.budget, 50_000.0);
        assert!(!parsed.seed_demo_data);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let parsed = ConsoleConfig::from_yaml_str("budget: 75000.0\n").unwrap();
        assert_eq!(parsed.budget, 75_000.0);
        assert!(parsed.seed_demo_data);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = ConsoleConfig::from_yaml_file("/no/such/finconsole.yaml").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_FILE_NOT_FOUND");
    }
}
