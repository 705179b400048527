// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for diagnostics and structured logging.
//!
//! # Organization
//!
//! * `collector` - item collection and processing events
//! * `file` - file read failures
//! * `demo` - configuration loading and demo runner events
//!
//! # Usage Pattern
//!
//! ```rust
//! use showcase::observability::messages::collector::ItemAdded;
//!
//! let msg = ItemAdded { name: "Item 1" };
//!
//! tracing::info!("{}", msg);
//! assert_eq!(msg.to_string(), "Added item: Item 1");
//! ```

pub mod collector;
pub mod demo;
pub mod file;
