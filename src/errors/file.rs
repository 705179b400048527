// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for reading files from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of `utils::read_file`.
///
/// Callers that want the "absent value plus diagnostic" behavior use
/// `utils::read_file_safely`, which never lets one of these escape.
#[derive(Error, Debug)]
pub enum FileReadError {
    /// Nothing exists at the requested path.
    #[error("File not found - {}", .path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O failure, including contents that are not valid UTF-8.
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileReadError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => FileReadError::NotFound { path },
            _ => FileReadError::Io { path, source },
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            FileReadError::NotFound { path } | FileReadError::Io { path, .. } => path,
        }
    }
}
