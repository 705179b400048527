// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use crate::errors::FileReadError;
use crate::observability::messages::file::{FileNotFound, FileReadFailed};
use crate::observability::{DiagnosticSink, Severity};

/// Read the whole file at `path` as UTF-8.
///
/// The handle is opened and closed inside `fs::read_to_string`, so it is
/// released on every exit path.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, FileReadError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| FileReadError::from_io(path, e))
}

/// Read a file, turning every failure into `None` plus one diagnostic on `sink`.
///
/// # Example
/// ```
/// use showcase::observability::RecordingSink;
/// use showcase::utils::read_file_safely;
///
/// let sink = RecordingSink::default();
/// assert_eq!(read_file_safely("/definitely/not/here.txt", &sink), None);
/// assert_eq!(
///     sink.messages(),
///     vec!["Error: File not found - /definitely/not/here.txt".to_string()]
/// );
/// ```
pub fn read_file_safely<P: AsRef<Path>>(path: P, sink: &dyn DiagnosticSink) -> Option<String> {
    match read_file(path) {
        Ok(contents) => Some(contents),
        Err(FileReadError::NotFound { path }) => {
            sink.emit(Severity::Error, &FileNotFound { path: &path });
            None
        }
        Err(error) => {
            sink.emit(Severity::Error, &FileReadFailed { error: &error });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::RecordingSink;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_reads_full_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "line one\nline two\n").unwrap();

        let sink = RecordingSink::default();
        let contents = read_file_safely(file.path(), &sink);

        assert_eq!(contents.as_deref(), Some("line one\nline two\n"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_file_is_absent_with_one_diagnostic() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let sink = RecordingSink::default();
        assert_eq!(read_file_safely(&missing, &sink), None);

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, Severity::Error);
        assert_eq!(
            entries[0].1,
            format!("Error: File not found - {}", missing.display())
        );
    }

    #[test]
    fn test_directory_is_a_generic_failure() {
        let dir = tempdir().unwrap();

        let sink = RecordingSink::default();
        assert_eq!(read_file_safely(dir.path(), &sink), None);

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Error reading file: "));
    }

    #[test]
    fn test_invalid_utf8_is_a_generic_failure() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let err = read_file(file.path()).unwrap_err();
        assert!(matches!(err, FileReadError::Io { .. }));

        let sink = RecordingSink::default();
        assert_eq!(read_file_safely(file.path(), &sink), None);
        assert!(sink.messages()[0].starts_with("Error reading file: "));
    }
}
