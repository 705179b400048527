// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for file read failures.

use std::fmt::{Display, Formatter};
use std::path::Path;

/// The requested file does not exist.
///
/// # Log Level
/// Emitted through a `DiagnosticSink` at `Severity::Error`
///
/// # Example
/// ```
/// use showcase::observability::messages::file::FileNotFound;
/// use std::path::Path;
///
/// let msg = FileNotFound { path: Path::new("notes.txt") };
/// assert_eq!(msg.to_string(), "Error: File not found - notes.txt");
/// ```
pub struct FileNotFound<'a> {
    pub path: &'a Path,
}

impl Display for FileNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Error: File not found - {}", self.path.display())
    }
}

/// Reading a file failed for any reason other than it being missing.
///
/// # Log Level
/// Emitted through a `DiagnosticSink` at `Severity::Error`
pub struct FileReadFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for FileReadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Error reading file: {}", self.error)
    }
}
