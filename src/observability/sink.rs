// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::Display;
use std::sync::Mutex;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Destination for user-facing notifications.
///
/// Implementations must be `Send + Sync` so a single sink can be shared
/// through an `Arc` between its owner and a collector.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, severity: Severity, message: &dyn Display);
}

/// Prints every diagnostic to stdout, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, severity: Severity, message: &dyn Display) {
        tracing::debug!(?severity, "{}", message);
        println!("{}", message);
    }
}

/// Forwards diagnostics to `tracing` at a level matching their severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, severity: Severity, message: &dyn Display) {
        match severity {
            Severity::Info => tracing::info!("{}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl RecordingSink {
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Rendered messages without their severity.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, message)| message).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, severity: Severity, message: &dyn Display) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((severity, message.to_string()));
    }
}
