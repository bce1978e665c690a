// Copyright 2025 Microbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core types and workloads for Microbench.
//!
//! This crate holds the seven CPU-bound workloads, the ordered result
//! mapping they fill, and the benchmark driver that runs them in sequence.
//!
//! # Quick Start
//!
//! ```no_run
//! let report = microbench_core::run_benchmark().expect("benchmark failed");
//!
//! for (name, value) in report.individual_results.iter() {
//!     println!("{name}: {value}");
//! }
//! println!("combined: {}", report.combined_result);
//! println!("elapsed: {:.3} ms", report.total_time_ms);
//! ```
//!
//! # Modules
//!
//! - [`workloads`] - The pure computations
//! - [`report`] - Result mapping, report and its builder
//! - [`driver`] - The sequential benchmark driver

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod driver;
pub mod error;
pub mod report;
pub mod workloads;

pub use driver::run_benchmark;
pub use error::{Error, Result};
pub use report::{is_truthy, truthy_sum, BenchmarkReport, ReportBuilder, ResultMap};
pub use workloads::Workload;
