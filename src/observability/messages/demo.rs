// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and the demo runner.

use std::fmt::{Display, Formatter};
use std::path::Path;

/// A demo configuration file was loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use showcase::observability::messages::demo::ConfigLoaded;
/// use std::path::Path;
///
/// let msg = ConfigLoaded {
///     path: Path::new("demo.yaml"),
///     item_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a Path,
    pub item_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded demo config '{}' with {} items",
            self.path.display(),
            self.item_count
        )
    }
}

/// A configuration file was requested but could not be used.
///
/// # Log Level
/// `warn!` - Degraded behavior, built-in defaults take over
pub struct ConfigFallback<'a> {
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConfigFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ignoring demo config '{}', using defaults: {}",
            self.path.display(),
            self.error
        )
    }
}

/// Writing the demo report failed part way through.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DemoAborted<'a> {
    pub error: &'a dyn Display,
}

impl Display for DemoAborted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Demo output aborted: {}", self.error)
    }
}
