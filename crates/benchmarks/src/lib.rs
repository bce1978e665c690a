//! Benchmark harness and canonical result output for Microbench.
//!
//! This crate wraps the driver from `microbench-core` in a repeated-run
//! harness, converts its output into canonical [`BenchmarkResult`] records
//! and writes them to disk.
//!
//! # Quick Start
//!
//! ```no_run
//! use microbench_benchmarks::{run_all_benchmarks, SuiteConfig};
//!
//! let config = SuiteConfig { iterations: 10, ..SuiteConfig::default() };
//! let results = run_all_benchmarks(&config).expect("benchmark failed");
//!
//! for result in &results {
//!     println!("{}: {}", result.target_id, result.metrics);
//! }
//! ```
//!
//! # Modules
//!
//! - [`result`] - The canonical `BenchmarkResult` struct
//! - [`harness`] - Repeated driver runs and report validation
//! - [`config`] - Layered suite configuration
//! - [`memory`] - Process memory sampling
//! - [`io`] - I/O operations for reading/writing results
//! - [`markdown`] - Markdown report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod harness;
pub mod io;
pub mod markdown;
pub mod memory;
pub mod result;

pub use config::{OutputFormat, SuiteConfig};
pub use harness::{run_iterations, validate_report, HarnessError, HarnessSummary};
pub use result::BenchmarkResult;

/// Run the harness and return its canonical results.
///
/// Produces the harness summary followed by the report of the final run.
///
/// # Errors
///
/// Returns a [`HarnessError`] if any run fails or produces an invalid report.
pub fn run_all_benchmarks(config: &SuiteConfig) -> Result<Vec<BenchmarkResult>, HarnessError> {
    let summary = run_iterations(config.iterations)?;
    Ok(summary_results(&summary))
}

/// Canonical results for a finished harness run: the summary, then the
/// report of the final run.
pub fn summary_results(summary: &HarnessSummary) -> Vec<BenchmarkResult> {
    vec![
        BenchmarkResult::from_summary(summary),
        BenchmarkResult::from_report(&summary.last_report),
    ]
}
