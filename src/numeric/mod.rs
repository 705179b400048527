// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Standalone numeric routines used by the demo.
//!
//! Both are pure functions over a signed bound, so negative or zero inputs are
//! accepted and simply produce an empty result.

mod primes;
mod sequence;

pub use primes::{find_primes, is_prime};
pub use sequence::{fibonacci, FibonacciSequence};
