// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fibonacci numbers, computed the slow way and the fast way.

use crate::error::{Error, Result};

/// Naive exponential recursion with `fib(0) = 0` and `fib(1) = 1`.
///
/// Kept deliberately unmemoized; the call tree is the workload.
pub fn fibonacci_recursive(n: u32) -> Result<u64> {
    if n <= 1 {
        return Ok(u64::from(n));
    }
    fibonacci_recursive(n - 1)?
        .checked_add(fibonacci_recursive(n - 2)?)
        .ok_or_else(|| Error::overflow("fibonacci_recursive"))
}

/// Linear accumulator loop with the same base cases as [`fibonacci_recursive`].
///
/// Returns [`Error::Overflow`] past `fib(93)`, the largest value a `u64` holds.
pub fn fibonacci_iterative(n: u32) -> Result<u64> {
    if n <= 1 {
        return Ok(u64::from(n));
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 2..=n {
        let next = a
            .checked_add(b)
            .ok_or_else(|| Error::overflow("fibonacci_iterative"))?;
        a = b;
        b = next;
    }
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(fibonacci_iterative(0).unwrap(), 0);
        assert_eq!(fibonacci_iterative(1).unwrap(), 1);
        assert_eq!(fibonacci_recursive(0).unwrap(), 0);
        assert_eq!(fibonacci_recursive(1).unwrap(), 1);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(fibonacci_iterative(10).unwrap(), 55);
        assert_eq!(fibonacci_recursive(10).unwrap(), 55);
        assert_eq!(fibonacci_iterative(40).unwrap(), 102_334_155);
    }

    #[test]
    fn test_recursive_matches_iterative() {
        for n in 0..=25 {
            assert_eq!(fibonacci_recursive(n), fibonacci_iterative(n), "n = {n}");
        }
    }

    #[test]
    fn test_iterative_overflow_is_an_error() {
        assert_eq!(fibonacci_iterative(93).unwrap(), 12_200_160_415_121_876_738);
        let err = fibonacci_iterative(94).unwrap_err();
        assert_eq!(err, Error::overflow("fibonacci_iterative"));
    }
}
