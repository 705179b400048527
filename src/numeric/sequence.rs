// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use num_bigint::BigUint;
use std::mem;

/// Unbounded iterator over the Fibonacci sequence starting at 0, 1.
#[derive(Debug, Clone)]
pub struct FibonacciSequence {
    current: BigUint,
    next: BigUint,
}

impl FibonacciSequence {
    pub fn new() -> Self {
        Self {
            current: BigUint::from(0u32),
            next: BigUint::from(1u32),
        }
    }
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let following = &self.current + &self.next;
        let upcoming = mem::replace(&mut self.next, following);
        Some(mem::replace(&mut self.current, upcoming))
    }
}

/// First `n` Fibonacci terms: `[]` for `n <= 0`, `[0]` for 1, `[0, 1, 1, 2, ...]` after.
///
/// Always exactly `n` terms for positive `n`; terms grow without overflow.
///
/// ```
/// use num_bigint::BigUint;
/// use showcase::numeric::fibonacci;
///
/// let expected: Vec<BigUint> = [0u32, 1, 1, 2, 3, 5, 8, 13, 21, 34]
///     .into_iter()
///     .map(BigUint::from)
///     .collect();
/// assert_eq!(fibonacci(10), expected);
/// assert!(fibonacci(-3).is_empty());
/// ```
pub fn fibonacci(n: i64) -> Vec<BigUint> {
    let Ok(terms) = usize::try_from(n) else {
        return Vec::new();
    };
    FibonacciSequence::new().take(terms).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(values: &[u64]) -> Vec<BigUint> {
        values.iter().copied().map(BigUint::from).collect()
    }

    #[test]
    fn test_non_positive_counts_are_empty() {
        assert!(fibonacci(0).is_empty());
        assert!(fibonacci(-1).is_empty());
        assert!(fibonacci(i64::MIN).is_empty());
    }

    #[test]
    fn test_small_counts() {
        assert_eq!(fibonacci(1), terms(&[0]));
        assert_eq!(fibonacci(2), terms(&[0, 1]));
        assert_eq!(fibonacci(3), terms(&[0, 1, 1]));
    }

    #[test]
    fn test_ten_terms() {
        assert_eq!(fibonacci(10), terms(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]));
    }

    #[test]
    fn test_each_term_is_sum_of_previous_two() {
        let sequence = fibonacci(50);
        assert_eq!(sequence.len(), 50);
        for window in sequence.windows(3) {
            assert_eq!(window[2], &window[0] + &window[1]);
        }
    }

    #[test]
    fn test_length_is_exact_past_u64_range() {
        let sequence = fibonacci(100);
        assert_eq!(sequence.len(), 100);
        // F(99)
        assert_eq!(
            sequence.last().map(|term| term.to_string()),
            Some("218922995834555169026".to_string())
        );
        // F(93) is the last term that fits in a u64
        assert_eq!(sequence[93], BigUint::from(12_200_160_415_121_876_738u64));
    }
}
