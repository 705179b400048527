// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod collector;     // item collection + annotation
pub mod config;        // demo config + defaults
pub mod demo;          // composition behind the binary
pub mod errors;        // error handling
pub mod numeric;       // sequence + prime routines
pub mod observability;
pub mod traits;        // unified abstractions
pub mod utils;
