//! Benchmark result types.
//!
//! This module provides the canonical BenchmarkResult struct written to
//! disk for every benchmark target.

use crate::harness::HarnessSummary;
use chrono::{DateTime, Utc};
use microbench_core::BenchmarkReport;
use serde::{Deserialize, Serialize};

/// Target id of the single driver report.
pub const DRIVER_TARGET_ID: &str = "microbench/driver";

/// Target id of the repeated-run harness summary.
pub const HARNESS_TARGET_ID: &str = "microbench/harness";

/// Canonical benchmark result structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Unique identifier for the benchmark target.
    pub target_id: String,
    /// Metrics data in JSON format.
    pub metrics: serde_json::Value,
    /// Timestamp when the benchmark was executed.
    pub timestamp: DateTime<Utc>,
}

impl BenchmarkResult {
    /// Create a new BenchmarkResult.
    pub fn new(target_id: impl Into<String>, metrics: serde_json::Value) -> Self {
        Self {
            target_id: target_id.into(),
            metrics,
            timestamp: Utc::now(),
        }
    }

    /// Wrap a driver report. The metrics are the report's own JSON form.
    pub fn from_report(report: &BenchmarkReport) -> Self {
        Self::new(DRIVER_TARGET_ID, to_metrics(report))
    }

    /// Wrap a harness summary.
    pub fn from_summary(summary: &HarnessSummary) -> Self {
        Self::new(
            HARNESS_TARGET_ID,
            serde_json::json!({
                "iterations": summary.iterations,
                "total_ms": summary.total_ms,
                "average_ms": summary.average_ms,
                "min_ms": summary.min_ms,
                "max_ms": summary.max_ms,
                "memory_used_bytes": summary.memory_used_bytes,
                "combined_result": summary.last_report.combined_result,
            }),
        )
    }

    /// Decode the metrics back into a driver report, if they hold one.
    pub fn as_report(&self) -> Option<BenchmarkReport> {
        serde_json::from_value(self.metrics.clone()).ok()
    }
}

fn to_metrics(report: &BenchmarkReport) -> serde_json::Value {
    // A report holds only strings and f64s, which always serialize
    serde_json::to_value(report).unwrap_or(serde_json::Value::Null)
}
