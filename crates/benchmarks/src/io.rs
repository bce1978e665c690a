//! I/O operations for benchmark results.
//!
//! This module provides functionality to read and write benchmark
//! results to the filesystem in various formats. All paths are relative
//! to an output directory chosen by the caller.

use crate::config::OutputFormat;
use crate::markdown;
use crate::result::BenchmarkResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default output directory path.
pub const OUTPUT_DIR: &str = "benchmarks/output";

/// Raw results subdirectory name.
pub const RAW_DIR: &str = "raw";

/// Combined results file name.
pub const ALL_RESULTS_FILE: &str = "all_results.json";

/// Summary file name.
pub const SUMMARY_FILE: &str = "summary.md";

/// Detailed report file name.
pub const DETAILED_FILE: &str = "detailed.md";

/// Ensure the output directory and its raw subdirectory exist.
pub fn ensure_output_dirs(dir: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(dir.as_ref().join(RAW_DIR))
}

/// Write benchmark results to JSON file.
pub fn write_results_json(results: &[BenchmarkResult], path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(results).map_err(io::Error::other)?;
    fs::write(path, json)
}

/// Path of the raw JSON file for a target id.
pub fn raw_result_path(dir: impl AsRef<Path>, target_id: &str) -> PathBuf {
    dir.as_ref()
        .join(RAW_DIR)
        .join(format!("{}.json", target_id.replace('/', "_")))
}

/// Write individual result to raw directory.
pub fn write_raw_result(result: &BenchmarkResult, dir: impl AsRef<Path>) -> io::Result<()> {
    let dir = dir.as_ref();
    ensure_output_dirs(dir)?;
    let json = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
    fs::write(raw_result_path(dir, &result.target_id), json)
}

/// Write summary and detailed markdown files.
pub fn write_summary(results: &[BenchmarkResult], dir: impl AsRef<Path>) -> io::Result<()> {
    let dir = dir.as_ref();
    ensure_output_dirs(dir)?;
    fs::write(dir.join(SUMMARY_FILE), markdown::generate_summary(results))?;
    fs::write(
        dir.join(DETAILED_FILE),
        markdown::generate_detailed_report(results),
    )
}

/// Write all benchmark outputs selected by `format`.
pub fn write_all_outputs(
    results: &[BenchmarkResult],
    dir: impl AsRef<Path>,
    format: OutputFormat,
) -> io::Result<()> {
    let dir = dir.as_ref();
    ensure_output_dirs(dir)?;

    if format.includes_json() {
        for result in results {
            write_raw_result(result, dir)?;
        }
        write_results_json(results, dir.join(ALL_RESULTS_FILE))?;
    }

    if format.includes_markdown() {
        write_summary(results, dir)?;
    }

    debug!(
        dir = %dir.display(),
        results = results.len(),
        %format,
        "Benchmark outputs written"
    );
    Ok(())
}

/// Read results from JSON file.
pub fn read_results_json(path: impl AsRef<Path>) -> io::Result<Vec<BenchmarkResult>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<BenchmarkResult> {
        vec![
            BenchmarkResult::new("microbench/primes", serde_json::json!({"value": 669.0})),
            BenchmarkResult::new("microbench/stringOps", serde_json::json!({"value": 5852.0})),
        ]
    }

    #[test]
    fn test_raw_result_path_flattens_target_id() {
        let path = raw_result_path("out", "microbench/driver");
        assert_eq!(path, Path::new("out/raw/microbench_driver.json"));
    }

    #[test]
    fn test_write_all_outputs_both() {
        let dir = tempfile::tempdir().unwrap();
        write_all_outputs(&sample_results(), dir.path(), OutputFormat::Both).unwrap();

        assert!(dir.path().join("raw/microbench_primes.json").is_file());
        assert!(dir.path().join("raw/microbench_stringOps.json").is_file());
        assert!(dir.path().join(ALL_RESULTS_FILE).is_file());
        assert!(dir.path().join(SUMMARY_FILE).is_file());
        assert!(dir.path().join(DETAILED_FILE).is_file());
    }

    #[test]
    fn test_write_all_outputs_json_only() {
        let dir = tempfile::tempdir().unwrap();
        write_all_outputs(&sample_results(), dir.path(), OutputFormat::Json).unwrap();

        assert!(dir.path().join(ALL_RESULTS_FILE).is_file());
        assert!(!dir.path().join(SUMMARY_FILE).exists());
    }

    #[test]
    fn test_write_all_outputs_markdown_only() {
        let dir = tempfile::tempdir().unwrap();
        write_all_outputs(&sample_results(), dir.path(), OutputFormat::Markdown).unwrap();

        assert!(dir.path().join(SUMMARY_FILE).is_file());
        assert!(!dir.path().join(ALL_RESULTS_FILE).exists());
    }

    #[test]
    fn test_results_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        write_results_json(&sample_results(), &path).unwrap();

        let read = read_results_json(&path).unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].target_id, "microbench/primes");
        assert_eq!(read[1].metrics["value"], 5852.0);
    }

    #[test]
    fn test_raw_driver_file_keeps_invocation_order() {
        let dir = tempfile::tempdir().unwrap();
        let report = microbench_core::run_benchmark().unwrap();
        write_raw_result(&BenchmarkResult::from_report(&report), dir.path()).unwrap();

        let content = fs::read_to_string(raw_result_path(dir.path(), "microbench/driver")).unwrap();
        let positions: Vec<_> = microbench_core::Workload::ALL
            .iter()
            .map(|w| content.find(&format!("\"{}\"", w.key())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_read_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();

        assert!(read_results_json(&path).is_err());
    }
}
