// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::collector::Item;
use crate::config::consts::{
    CONFIG_ENV_VAR, DEFAULT_FIBONACCI_TERMS, DEFAULT_PRIME_LIMIT, DEFAULT_PROCESSOR_NAME,
};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs for one run of the demo.
///
/// Every field is optional in YAML; omitted fields take the built-in demo
/// values, so an empty document is a valid config.
///
/// # Fields
/// * `processor_name` - Name of the collector, stamped into every processed item
/// * `fibonacci_terms` - How many Fibonacci terms to print
/// * `prime_limit` - Inclusive upper bound for the prime listing
/// * `items` - Records fed to the collector, each an arbitrary mapping
///
/// # Example
/// ```yaml
/// processor_name: NightlyBatch
/// fibonacci_terms: 15
/// prime_limit: 100
/// items:
///   - name: "Sensor A"
///     value: 17
///   - value: 3   # announced as "Unknown"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub processor_name: String,
    pub fibonacci_terms: i64,
    pub prime_limit: i64,
    pub items: Vec<Item>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            processor_name: DEFAULT_PROCESSOR_NAME.to_string(),
            fibonacci_terms: DEFAULT_FIBONACCI_TERMS,
            prime_limit: DEFAULT_PRIME_LIMIT,
            items: (1..=3)
                .map(|n| {
                    Item::new()
                        .with("name", format!("Item {}", n))
                        .with("value", n * 100)
                })
                .collect(),
        }
    }
}

impl DemoConfig {
    /// Check values that deserialize fine but make no sense for the demo.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.processor_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "processor_name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: DemoConfig = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cfg)
}

/// Load a config from a YAML file and reject unusable values
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Path named by `SHOWCASE_CONFIG`, if it is set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
