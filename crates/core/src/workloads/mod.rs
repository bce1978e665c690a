// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The CPU-bound workloads exercised by the benchmark driver.
//!
//! Every function in this module is pure: no shared state, no I/O. The
//! [`Workload`] enum is the catalogue the driver and the benchmark targets
//! iterate over, pairing each computation with its result key and its
//! fixed parameter.

pub mod arrays;
pub mod fibonacci;
pub mod matrix;
pub mod objects;
pub mod primes;
pub mod strings;

pub use arrays::array_operations;
pub use fibonacci::{fibonacci_iterative, fibonacci_recursive};
pub use matrix::matrix_multiply;
pub use objects::{object_operations, NestedValues, ObjectRecord};
pub use primes::{generate_primes, is_prime};
pub use strings::{string_operations, string_stats, StringStats};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input of the recursive Fibonacci workload.
pub const FIB_RECURSIVE_N: u32 = 20;
/// Input of the iterative Fibonacci workload.
pub const FIB_ITERATIVE_N: u32 = 40;
/// Upper bound (inclusive) of the prime generation workload.
pub const PRIME_LIMIT: u64 = 5000;
/// Number of records built by the object workload.
pub const OBJECT_ITERATIONS: u64 = 500;
/// Element count of the array workload.
pub const ARRAY_SIZE: usize = 2000;
/// Line count of the string workload.
pub const STRING_ITERATIONS: u64 = 300;
/// Side length of the square matrices in the matrix workload.
pub const MATRIX_SIZE: usize = 25;

/// One of the seven benchmark computations.
///
/// Variants are declared in driver order; [`Workload::ALL`] preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Workload {
    /// Naive recursive Fibonacci.
    FibRecursive,
    /// Linear iterative Fibonacci.
    FibIterative,
    /// Count of primes up to the limit.
    Primes,
    /// Keyed record construction and traversal.
    ObjectOps,
    /// Trigonometric array transform pipeline.
    ArrayOps,
    /// String building, searching and replacing.
    StringOps,
    /// Element sum of a square matrix product.
    MatrixMultiply,
}

impl Workload {
    /// All workloads, in the order the driver invokes them.
    pub const ALL: [Workload; 7] = [
        Workload::FibRecursive,
        Workload::FibIterative,
        Workload::Primes,
        Workload::ObjectOps,
        Workload::ArrayOps,
        Workload::StringOps,
        Workload::MatrixMultiply,
    ];

    /// The key this workload's result is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FibRecursive => "fibRecursive",
            Self::FibIterative => "fibIterative",
            Self::Primes => "primes",
            Self::ObjectOps => "objectOps",
            Self::ArrayOps => "arrayOps",
            Self::StringOps => "stringOps",
            Self::MatrixMultiply => "matrixMultiply",
        }
    }

    /// The fixed input the driver passes to this workload.
    pub fn parameter(&self) -> u64 {
        match self {
            Self::FibRecursive => u64::from(FIB_RECURSIVE_N),
            Self::FibIterative => u64::from(FIB_ITERATIVE_N),
            Self::Primes => PRIME_LIMIT,
            Self::ObjectOps => OBJECT_ITERATIONS,
            Self::ArrayOps => ARRAY_SIZE as u64,
            Self::StringOps => STRING_ITERATIONS,
            Self::MatrixMultiply => MATRIX_SIZE as u64,
        }
    }

    /// Run the workload with its fixed parameter and return its numeric result.
    pub fn execute(&self) -> Result<f64> {
        let value = match self {
            Self::FibRecursive => fibonacci_recursive(FIB_RECURSIVE_N)? as f64,
            Self::FibIterative => fibonacci_iterative(FIB_ITERATIVE_N)? as f64,
            Self::Primes => generate_primes(PRIME_LIMIT).len() as f64,
            Self::ObjectOps => object_operations(OBJECT_ITERATIONS)? as f64,
            Self::ArrayOps => array_operations(ARRAY_SIZE),
            Self::StringOps => string_operations(STRING_ITERATIONS) as f64,
            Self::MatrixMultiply => matrix_multiply(MATRIX_SIZE)? as f64,
        };
        Ok(value)
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_driver_order() {
        let keys: Vec<_> = Workload::ALL.iter().map(Workload::key).collect();
        assert_eq!(
            keys,
            [
                "fibRecursive",
                "fibIterative",
                "primes",
                "objectOps",
                "arrayOps",
                "stringOps",
                "matrixMultiply"
            ]
        );
    }

    #[test]
    fn test_serde_uses_result_keys() {
        let json = serde_json::to_string(&Workload::MatrixMultiply).unwrap();
        assert_eq!(json, "\"matrixMultiply\"");
    }

    #[test]
    fn test_fixed_parameter_goldens() {
        assert_eq!(Workload::FibRecursive.execute().unwrap(), 6765.0);
        assert_eq!(Workload::FibIterative.execute().unwrap(), 102_334_155.0);
        assert_eq!(Workload::Primes.execute().unwrap(), 669.0);
        assert_eq!(Workload::ObjectOps.execute().unwrap(), 12_946_103_664.0);
        assert_eq!(Workload::StringOps.execute().unwrap(), 5852.0);
        assert_eq!(Workload::MatrixMultiply.execute().unwrap(), 812_500.0);

        let array = Workload::ArrayOps.execute().unwrap();
        assert!((array - 125.100_633_932_648).abs() < 1e-6);
    }

    #[test]
    fn test_parameters() {
        assert_eq!(Workload::FibRecursive.parameter(), 20);
        assert_eq!(Workload::Primes.parameter(), 5000);
        assert_eq!(Workload::MatrixMultiply.parameter(), 25);
    }
}
