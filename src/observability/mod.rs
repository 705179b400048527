// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and user-facing diagnostics.
//!
//! Message types follow a struct-based pattern with a `Display` implementation
//! so the wording lives in one place instead of being scattered as format
//! strings through the collector, file helpers and demo runner.
//!
//! Two channels consume these messages:
//!
//! * `tracing` events for operational logging (stderr, filtered by `RUST_LOG`)
//! * a [`DiagnosticSink`] for notifications the caller is meant to see, such as
//!   `Added item: ...` or a failed file read
//!
//! The sink is injected, so tests assert on emitted messages with a
//! [`RecordingSink`] instead of capturing stdout.
//!
//! # Usage
//!
//! ```rust
//! use showcase::observability::messages::file::FileReadFailed;
//! use showcase::observability::{DiagnosticSink, RecordingSink, Severity};
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
//! let sink = RecordingSink::default();
//! sink.emit(Severity::Error, &FileReadFailed { error: &error });
//!
//! assert_eq!(sink.messages(), vec!["Error reading file: disk on fire".to_string()]);
//! ```

pub mod messages;
mod sink;

pub use sink::{ConsoleSink, DiagnosticSink, RecordingSink, Severity, TracingSink};
