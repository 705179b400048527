// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Item collection and on-demand annotation.
//!
//! An [`ItemCollector`] keeps items in insertion order (duplicates allowed) and
//! turns the whole list into [`ProcessedItem`]s on every `process_all` call.
//! Its processed counter is cumulative: processing the same three items twice
//! counts six.
//!
//! ```rust
//! use showcase::collector::{Item, ItemCollector};
//!
//! let mut collector = ItemCollector::new("DemoProcessor");
//! collector.add(Item::new().with("name", "Item 1").with("value", 100));
//! collector.add(Item::new().with("name", "Item 2").with("value", 200));
//!
//! let results = collector.process_all();
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].processor(), "DemoProcessor");
//!
//! collector.process_all();
//! assert_eq!(collector.stats().processed, 4);
//! ```

mod item;
mod processor;

pub use item::{Item, ProcessedItem, NAME_KEY, PROCESSED_AT_KEY, PROCESSOR_KEY};
pub use processor::{Clock, TimestampProcessor};

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::observability::messages::collector::{ItemAdded, ItemsProcessed};
use crate::observability::{DiagnosticSink, Severity, TracingSink};
use crate::traits::ItemProcessor;

/// Snapshot of a collector's size and lifetime processing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectorStats {
    pub total_items: usize,
    pub processed: u64,
}

impl fmt::Display for CollectorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{total_items: {}, processed: {}}}",
            self.total_items, self.processed
        )
    }
}

/// Accumulates items and annotates them with an [`ItemProcessor`].
pub struct ItemCollector<P = TimestampProcessor> {
    processor: P,
    items: Vec<Item>,
    processed_count: u64,
    sink: Arc<dyn DiagnosticSink>,
}

impl ItemCollector<TimestampProcessor> {
    /// Create an empty collector whose processed items carry `name` as processor.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_processor(TimestampProcessor::new(name))
    }

    /// Replace the timestamp source, mostly useful for deterministic tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.processor = self.processor.with_clock(clock);
        self
    }
}

impl<P: ItemProcessor> ItemCollector<P> {
    pub fn with_processor(processor: P) -> Self {
        Self {
            processor,
            items: Vec::new(),
            processed_count: 0,
            sink: Arc::new(TracingSink),
        }
    }

    /// Route `Added item` notifications to `sink` instead of `tracing`.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn name(&self) -> &str {
        self.processor.name()
    }

    /// Append `item` and announce it by its display name.
    pub fn add(&mut self, item: Item) {
        self.sink.emit(
            Severity::Info,
            &ItemAdded {
                name: &item.display_name(),
            },
        );
        self.items.push(item);
    }

    /// Annotate every stored item, in insertion order.
    ///
    /// Each call reprocesses the full list and adds its length to the
    /// lifetime counter.
    pub fn process_all(&mut self) -> Vec<ProcessedItem> {
        let mut results = Vec::with_capacity(self.items.len());
        for item in &self.items {
            results.push(self.processor.process(item));
            self.processed_count += 1;
        }

        tracing::debug!(
            "{}",
            ItemsProcessed {
                collector: self.processor.name(),
                count: results.len(),
                lifetime_processed: self.processed_count,
            }
        );

        results
    }

    pub fn stats(&self) -> CollectorStats {
        CollectorStats {
            total_items: self.items.len(),
            processed: self.processed_count,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
