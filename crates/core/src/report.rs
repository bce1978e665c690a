// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Result mapping and benchmark report types.
//!
//! A [`BenchmarkReport`] is produced once per driver run through a
//! [`ReportBuilder`], which owns the start instant and the ordered
//! [`ResultMap`] until [`ReportBuilder::finish`] freezes them.
//!
//! # Combination policy
//!
//! `combined_result` only sums *truthy* values: non-zero and not NaN. A
//! workload that legitimately returns `0` therefore contributes nothing.
//! This mirrors the behaviour existing consumers of the report depend on.

use crate::error::{Error, Result};
use crate::workloads::Workload;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Whether a result counts towards the combined sum.
pub fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Sum of the truthy values, in iteration order.
pub fn truthy_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|&v| is_truthy(v))
        .fold(0.0, |acc, v| acc + v)
}

/// Ordered mapping from result key to numeric result.
///
/// Iteration and serialization follow insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultMap(IndexMap<String, f64>);

impl ResultMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result. Keys may only be recorded once.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Result<()> {
        let key = key.into();
        if self.0.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        self.0.insert(key, value);
        Ok(())
    }

    /// Look up a result by key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    /// Number of recorded results.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no result has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the truthy values.
    pub fn truthy_sum(&self) -> f64 {
        truthy_sum(self.values())
    }
}

/// The structured output of one driver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    /// Per-workload results in invocation order.
    pub individual_results: ResultMap,
    /// Sum of the truthy individual results.
    pub combined_result: f64,
    /// Wall-clock time of the run, in milliseconds.
    pub total_time_ms: f64,
}

impl BenchmarkReport {
    /// Create a new builder, starting the clock.
    pub fn builder() -> ReportBuilder {
        ReportBuilder::start()
    }

    /// Assemble a report from finished results and the elapsed time.
    pub fn from_parts(individual_results: ResultMap, elapsed: Duration) -> Self {
        let combined_result = individual_results.truthy_sum();
        Self {
            individual_results,
            combined_result,
            total_time_ms: elapsed.as_nanos() as f64 / 1_000_000.0,
        }
    }

    /// Results that were left out of the combined sum.
    pub fn skipped_keys(&self) -> Vec<&str> {
        self.individual_results
            .iter()
            .filter(|(_, v)| !is_truthy(*v))
            .map(|(k, _)| k)
            .collect()
    }
}

/// Builder for [`BenchmarkReport`] instances.
#[derive(Debug)]
pub struct ReportBuilder {
    started: Instant,
    results: ResultMap,
}

impl ReportBuilder {
    /// Start timing a new run.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            results: ResultMap::new(),
        }
    }

    /// Record a result under `key`. Returns `Err` if the key was already recorded.
    pub fn record(mut self, key: impl Into<String>, value: f64) -> Result<Self> {
        self.results.insert(key, value)?;
        Ok(self)
    }

    /// Record the result of a workload under its key.
    pub fn record_workload(self, workload: Workload, value: f64) -> Result<Self> {
        self.record(workload.key(), value)
    }

    /// Combine the results, then stop the clock and build the
    /// [`BenchmarkReport`].
    pub fn finish(self) -> BenchmarkReport {
        let combined_result = self.results.truthy_sum();
        let elapsed = self.started.elapsed();
        BenchmarkReport {
            individual_results: self.results,
            combined_result,
            total_time_ms: elapsed.as_nanos() as f64 / 1_000_000.0,
        }
    }
}
