//! Repeated-run harness for the benchmark driver.
//!
//! Runs the driver a fixed number of times, strictly sequentially, and
//! aggregates the per-run wall-clock times. Every report is validated before
//! it is counted; the first failure aborts the whole harness.

use crate::memory::{memory_growth, ProcessMemory};
use microbench_core::{run_benchmark, truthy_sum, BenchmarkReport, Workload};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Counter of completed driver runs.
pub const RUNS_COUNTER: &str = "microbench_runs_total";

/// Histogram of driver run durations in milliseconds.
pub const RUN_DURATION_HISTOGRAM: &str = "microbench_run_duration_ms";

/// Ways a driver report can be malformed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReportViolation {
    /// The result keys differ from the workload catalogue.
    #[error("unexpected result keys: expected {expected:?}, got {actual:?}")]
    Keys {
        /// Keys in driver order.
        expected: Vec<String>,
        /// Keys found in the report.
        actual: Vec<String>,
    },

    /// The combined result is NaN or infinite.
    #[error("combined result is not a finite number: {0}")]
    NonFiniteCombined(f64),

    /// The combined result differs from the recomputed truthy sum.
    #[error("combined result {reported} does not match recomputed sum {recomputed}")]
    CombinedMismatch {
        /// Value carried by the report.
        reported: f64,
        /// Truthy sum of the individual results.
        recomputed: f64,
    },

    /// The combined result is zero or negative.
    #[error("combined result must be positive, got {0}")]
    NonPositiveCombined(f64),

    /// The elapsed time is negative, NaN or infinite.
    #[error("total time is not a finite non-negative duration: {0}")]
    InvalidElapsed(f64),
}

/// Errors that abort a harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The harness was asked to run zero times.
    #[error("Iteration count must be at least 1")]
    NoIterations,

    /// A workload failed during a run.
    #[error("Benchmark run {iteration} failed: {source}")]
    Workload {
        /// One-based run number.
        iteration: u32,
        /// The workload error.
        #[source]
        source: microbench_core::Error,
    },

    /// A run produced a malformed report.
    #[error("Benchmark run {iteration} produced an invalid report: {violation}")]
    InvalidReport {
        /// One-based run number.
        iteration: u32,
        /// What was wrong with it.
        violation: ReportViolation,
    },
}

/// Aggregate of a harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessSummary {
    /// Number of driver runs.
    pub iterations: u32,
    /// Sum of the per-run times, in milliseconds.
    pub total_ms: f64,
    /// Mean per-run time, in milliseconds.
    pub average_ms: f64,
    /// Fastest run, in milliseconds.
    pub min_ms: f64,
    /// Slowest run, in milliseconds.
    pub max_ms: f64,
    /// Growth of the process resident set across all runs, in bytes.
    pub memory_used_bytes: u64,
    /// The report of the final run.
    pub last_report: BenchmarkReport,
}

/// Check a report against the workload catalogue and the combination policy.
pub fn validate_report(report: &BenchmarkReport) -> Result<(), ReportViolation> {
    let actual: Vec<&str> = report.individual_results.keys().collect();
    let expected: Vec<&str> = Workload::ALL.iter().map(Workload::key).collect();
    if actual != expected {
        return Err(ReportViolation::Keys {
            expected: expected.into_iter().map(String::from).collect(),
            actual: actual.into_iter().map(String::from).collect(),
        });
    }

    if !report.combined_result.is_finite() {
        return Err(ReportViolation::NonFiniteCombined(report.combined_result));
    }

    let recomputed = truthy_sum(report.individual_results.values());
    if recomputed != report.combined_result {
        return Err(ReportViolation::CombinedMismatch {
            reported: report.combined_result,
            recomputed,
        });
    }

    if report.combined_result <= 0.0 {
        return Err(ReportViolation::NonPositiveCombined(report.combined_result));
    }

    if !report.total_time_ms.is_finite() || report.total_time_ms < 0.0 {
        return Err(ReportViolation::InvalidElapsed(report.total_time_ms));
    }

    Ok(())
}

/// Run the driver `iterations` times and summarize the timings.
pub fn run_iterations(iterations: u32) -> Result<HarnessSummary, HarnessError> {
    run_iterations_with(iterations, run_benchmark)
}

/// Run `driver` `iterations` times and summarize the timings.
///
/// The driver is injectable so callers can time alternative workload sets.
pub fn run_iterations_with<F>(iterations: u32, mut driver: F) -> Result<HarnessSummary, HarnessError>
where
    F: FnMut() -> microbench_core::Result<BenchmarkReport>,
{
    if iterations == 0 {
        return Err(HarnessError::NoIterations);
    }

    info!(iterations, "Starting benchmark harness");

    let mut total_ms = 0.0;
    let mut min_ms = f64::INFINITY;
    let mut max_ms = 0.0f64;
    let mut last_report = None;

    let mut memory = ProcessMemory::new();
    let memory_before = memory.resident_bytes();

    for iteration in 1..=iterations {
        let report = driver().map_err(|source| HarnessError::Workload { iteration, source })?;
        validate_report(&report)
            .map_err(|violation| HarnessError::InvalidReport { iteration, violation })?;

        let elapsed = report.total_time_ms;
        total_ms += elapsed;
        min_ms = min_ms.min(elapsed);
        max_ms = max_ms.max(elapsed);

        metrics::counter!(RUNS_COUNTER).increment(1);
        metrics::histogram!(RUN_DURATION_HISTOGRAM).record(elapsed);
        debug!(iteration, elapsed_ms = elapsed, "Benchmark run completed");

        last_report = Some(report);
    }

    let memory_used_bytes = memory_growth(memory_before, memory.resident_bytes());

    // iterations >= 1, so the loop body ran at least once
    let Some(last_report) = last_report else {
        return Err(HarnessError::NoIterations);
    };

    let summary = HarnessSummary {
        iterations,
        total_ms,
        average_ms: total_ms / f64::from(iterations),
        min_ms,
        max_ms,
        memory_used_bytes,
        last_report,
    };

    info!(
        iterations,
        total_ms = summary.total_ms,
        average_ms = summary.average_ms,
        memory_used_bytes,
        combined_result = summary.last_report.combined_result,
        "Benchmark harness finished"
    );

    Ok(summary)
}
