// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The sequential benchmark driver.
//!
//! The driver runs every [`Workload`] once, strictly one after another on
//! the calling thread, so the elapsed time reflects a single-threaded cost.
//! A failing workload aborts the run: there are no partial reports.

use crate::error::Result;
use crate::report::BenchmarkReport;
use crate::workloads::Workload;
use tracing::{debug, trace};

/// Run all seven workloads with their fixed parameters and report the results.
///
/// # Errors
///
/// Returns the first [`crate::Error`] raised by a workload.
pub fn run_benchmark() -> Result<BenchmarkReport> {
    run_workloads(&Workload::ALL)
}

/// Run the given workloads in order and report their results.
///
/// Each workload may appear only once.
pub fn run_workloads(workloads: &[Workload]) -> Result<BenchmarkReport> {
    let mut builder = BenchmarkReport::builder();

    for &workload in workloads {
        let value = workload.execute()?;
        trace!(workload = %workload, value, "Workload completed");
        builder = builder.record_workload(workload, value)?;
    }

    let report = builder.finish();
    debug!(
        combined_result = report.combined_result,
        total_time_ms = report.total_time_ms,
        "Benchmark run finished"
    );
    Ok(report)
}
