// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark targets backed by the core workloads.

use crate::BenchTarget;
use microbench_benchmarks::BenchmarkResult;
use microbench_core::Workload;
use serde_json::json;
use std::time::Instant;
use tracing::{debug, warn};

/// Prefix shared by all target ids.
pub const TARGET_PREFIX: &str = "microbench";

/// A single workload run once with its fixed parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadTarget {
    workload: Workload,
}

impl WorkloadTarget {
    /// Create a target for `workload`.
    pub fn new(workload: Workload) -> Self {
        Self { workload }
    }
}

impl BenchTarget for WorkloadTarget {
    fn id(&self) -> String {
        format!("{}/{}", TARGET_PREFIX, self.workload.key())
    }

    fn run(&self) -> BenchmarkResult {
        let started = Instant::now();
        let outcome = self.workload.execute();
        let elapsed_ms = started.elapsed().as_nanos() as f64 / 1_000_000.0;

        let metrics = match outcome {
            Ok(value) => {
                debug!(workload = %self.workload, value, elapsed_ms, "Target completed");
                json!({
                    "workload": self.workload.key(),
                    "parameter": self.workload.parameter(),
                    "value": value,
                    "elapsed_ms": elapsed_ms,
                })
            }
            Err(e) => {
                warn!(workload = %self.workload, error = %e, "Target failed");
                json!({
                    "workload": self.workload.key(),
                    "parameter": self.workload.parameter(),
                    "error": e.to_string(),
                })
            }
        };

        BenchmarkResult::new(self.id(), metrics)
    }
}
