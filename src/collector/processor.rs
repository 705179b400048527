// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};

use super::item::{Item, ProcessedItem};
use crate::traits::ItemProcessor;

/// Source of processing timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Copies an item and stamps it with the current time and its own name.
#[derive(Debug, Clone)]
pub struct TimestampProcessor {
    name: String,
    clock: Clock,
}

impl TimestampProcessor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

impl ItemProcessor for TimestampProcessor {
    fn process(&self, item: &Item) -> ProcessedItem {
        ProcessedItem::new(item.clone(), (self.clock)(), self.name.as_str())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
