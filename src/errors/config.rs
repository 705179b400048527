// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading and validating the demo configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a demo configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read from disk.
    #[error("Failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for `DemoConfig`.
    #[error("Failed to parse config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration parsed but one of its values is unusable.
    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
