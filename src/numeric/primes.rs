// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Trial division by every integer from 2 up to `isqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let mut divisor: u64 = 2;
    // `divisor <= n / divisor` is `divisor * divisor <= n` without overflow
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// All primes `<= limit`, ascending. Empty when `limit < 2`.
///
/// O(limit * sqrt(limit)); intended for small limits.
///
/// ```
/// use showcase::numeric::find_primes;
///
/// assert_eq!(find_primes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub fn find_primes(limit: i64) -> Vec<u64> {
    let Ok(limit) = u64::try_from(limit) else {
        return Vec::new();
    };
    if limit < 2 {
        return Vec::new();
    }

    (2..=limit).filter(|&candidate| is_prime(candidate)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_below_two_are_empty() {
        assert_eq!(find_primes(1), Vec::<u64>::new());
        assert_eq!(find_primes(0), Vec::<u64>::new());
        assert_eq!(find_primes(-17), Vec::<u64>::new());
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert_eq!(find_primes(2), vec![2]);
        assert_eq!(find_primes(13), vec![2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn test_primes_up_to_thirty() {
        assert_eq!(find_primes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_perfect_squares_of_primes_are_rejected() {
        for square in [4, 9, 25, 49, 121, 169] {
            assert!(!is_prime(square), "{} is not prime", square);
        }
    }

    #[test]
    fn test_count_below_one_thousand() {
        assert_eq!(find_primes(1_000).len(), 168);
    }

    #[test]
    fn test_is_prime_large_values() {
        // Largest prime below 2^32
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(u64::MAX));
    }
}
