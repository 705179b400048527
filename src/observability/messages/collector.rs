// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for item collection and processing events.

use std::fmt::{Display, Formatter};

/// An item was appended to a collector.
///
/// # Log Level
/// Emitted through the collector's `DiagnosticSink` at `Severity::Info`
///
/// # Example
/// ```
/// use showcase::observability::messages::collector::ItemAdded;
///
/// let msg = ItemAdded { name: "Item 2" };
/// assert_eq!(msg.to_string(), "Added item: Item 2");
/// ```
pub struct ItemAdded<'a> {
    pub name: &'a str,
}

impl Display for ItemAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Added item: {}", self.name)
    }
}

/// A collector finished a `process_all` pass.
///
/// # Log Level
/// `debug!` - Routine bookkeeping
///
/// # Example
/// ```
/// use showcase::observability::messages::collector::ItemsProcessed;
///
/// let msg = ItemsProcessed {
///     collector: "DemoProcessor",
///     count: 3,
///     lifetime_processed: 6,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ItemsProcessed<'a> {
    pub collector: &'a str,
    pub count: usize,
    pub lifetime_processed: u64,
}

impl Display for ItemsProcessed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Collector '{}' processed {} items (lifetime total: {})",
            self.collector, self.count, self.lifetime_processed
        )
    }
}
