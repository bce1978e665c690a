// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark target adapters.
//!
//! This module provides the canonical BenchTarget trait and registry
//! for benchmark targets. Every workload is exposed as its own target so
//! its cost can be measured in isolation from the driver.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod targets;

pub use targets::WorkloadTarget;

use microbench_benchmarks::BenchmarkResult;
use microbench_core::Workload;

/// Canonical benchmark target trait.
///
/// Implement this trait for any component that should be benchmarkable
/// through the canonical benchmark interface.
pub trait BenchTarget {
    /// Returns the unique identifier for this benchmark target.
    fn id(&self) -> String;

    /// Run the benchmark and return results.
    fn run(&self) -> BenchmarkResult;
}

/// Registry of all available benchmark targets.
///
/// One target per workload, in driver order.
pub fn all_targets() -> Vec<Box<dyn BenchTarget>> {
    Workload::ALL
        .into_iter()
        .map(|w| Box::new(WorkloadTarget::new(w)) as Box<dyn BenchTarget>)
        .collect()
}

/// Run every registered target once, sequentially.
pub fn run_all_targets() -> Vec<BenchmarkResult> {
    all_targets().iter().map(|target| target.run()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let ids: Vec<_> = all_targets().iter().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            [
                "microbench/fibRecursive",
                "microbench/fibIterative",
                "microbench/primes",
                "microbench/objectOps",
                "microbench/arrayOps",
                "microbench/stringOps",
                "microbench/matrixMultiply",
            ]
        );
    }

    #[test]
    fn test_run_all_targets_matches_registry() {
        let results = run_all_targets();
        let ids: Vec<_> = all_targets().iter().map(|t| t.id()).collect();
        let result_ids: Vec<_> = results.iter().map(|r| r.target_id.clone()).collect();
        assert_eq!(result_ids, ids);
    }
}
