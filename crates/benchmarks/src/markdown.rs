//! Markdown output generation for benchmark results.
//!
//! This module provides functionality to generate markdown-formatted
//! benchmark reports from canonical results and driver reports.

use crate::harness::HarnessSummary;
use crate::result::BenchmarkResult;
use microbench_core::{is_truthy, BenchmarkReport};
use std::fmt::Write;

const METRICS_PREVIEW_LEN: usize = 50;

fn preview(metrics: &serde_json::Value) -> String {
    let full = metrics.to_string();
    if full.chars().count() > METRICS_PREVIEW_LEN {
        let head: String = full.chars().take(METRICS_PREVIEW_LEN - 3).collect();
        format!("{head}...")
    } else {
        full
    }
}

/// Generate a markdown summary from benchmark results.
pub fn generate_summary(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();

    writeln!(output, "# Benchmark Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "## Results").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Target ID | Timestamp | Metrics |").unwrap();
    writeln!(output, "|-----------|-----------|---------|").unwrap();

    for result in results {
        writeln!(
            output,
            "| {} | {} | {} |",
            result.target_id,
            result.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            preview(&result.metrics)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(output, "Total benchmarks: {}", results.len()).unwrap();

    output
}

/// Generate detailed markdown report.
///
/// Results that carry a driver report get a rendered results table; all
/// others are dumped as pretty JSON.
pub fn generate_detailed_report(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();

    writeln!(output, "# Detailed Benchmark Report").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();

    for result in results {
        writeln!(output, "## {}", result.target_id).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Timestamp:** {}", result.timestamp.to_rfc3339()).unwrap();
        writeln!(output).unwrap();

        if let Some(report) = result.as_report() {
            output.push_str(&render_report(&report));
        } else {
            writeln!(output, "**Metrics:**").unwrap();
            writeln!(output, "```json").unwrap();
            writeln!(
                output,
                "{}",
                serde_json::to_string_pretty(&result.metrics).unwrap_or_default()
            )
            .unwrap();
            writeln!(output, "```").unwrap();
        }
        writeln!(output).unwrap();
    }

    output
}

/// Render a single driver report as a markdown table.
///
/// Results excluded from the combined sum are marked.
pub fn render_report(report: &BenchmarkReport) -> String {
    let mut output = String::new();

    writeln!(output, "| Workload | Result | Combined |").unwrap();
    writeln!(output, "|----------|--------|----------|").unwrap();
    for (key, value) in report.individual_results.iter() {
        let counted = if is_truthy(value) { "yes" } else { "skipped" };
        writeln!(output, "| {key} | {value} | {counted} |").unwrap();
    }
    writeln!(output).unwrap();
    writeln!(output, "**Combined result:** {}", report.combined_result).unwrap();
    writeln!(output, "**Total time:** {:.3} ms", report.total_time_ms).unwrap();

    output
}

/// Render a harness summary as a markdown section.
pub fn render_harness_summary(summary: &HarnessSummary) -> String {
    let mut output = String::new();

    writeln!(output, "## Harness").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "- Iterations: {}", summary.iterations).unwrap();
    writeln!(output, "- Total: {:.3} ms", summary.total_ms).unwrap();
    writeln!(output, "- Average: {:.3} ms", summary.average_ms).unwrap();
    writeln!(output, "- Min: {:.3} ms", summary.min_ms).unwrap();
    writeln!(output, "- Max: {:.3} ms", summary.max_ms).unwrap();
    writeln!(
        output,
        "- Memory used: {} bytes ({:.2} KB)",
        summary.memory_used_bytes,
        summary.memory_used_bytes as f64 / 1024.0
    )
    .unwrap();
    writeln!(output).unwrap();
    output.push_str(&render_report(&summary.last_report));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use microbench_core::ResultMap;
    use std::time::Duration;

    #[test]
    fn test_summary_lists_every_target() {
        let results = vec![
            BenchmarkResult::new("microbench/a", serde_json::json!({"value": 1})),
            BenchmarkResult::new("microbench/b", serde_json::json!({"value": 2})),
        ];
        let summary = generate_summary(&results);

        assert!(summary.starts_with("# Benchmark Summary"));
        assert!(summary.contains("| microbench/a |"));
        assert!(summary.contains("| microbench/b |"));
        assert!(summary.contains("Total benchmarks: 2"));
    }

    #[test]
    fn test_long_metrics_are_truncated() {
        let long = "x".repeat(200);
        let results = vec![BenchmarkResult::new("t", serde_json::json!({ "s": long }))];
        let summary = generate_summary(&results);

        let row = summary.lines().find(|l| l.starts_with("| t |")).unwrap();
        assert!(row.contains("..."));
        assert!(!row.contains(&"x".repeat(60)));
    }

    #[test]
    fn test_render_report_marks_skipped_results() {
        let mut results = ResultMap::new();
        results.insert("primes", 669.0).unwrap();
        results.insert("matrixMultiply", 0.0).unwrap();
        let report = BenchmarkReport::from_parts(results, Duration::from_millis(4));

        let table = render_report(&report);
        assert!(table.contains("| primes | 669 | yes |"));
        assert!(table.contains("| matrixMultiply | 0 | skipped |"));
        assert!(table.contains("**Combined result:** 669"));
        assert!(table.contains("**Total time:** 4.000 ms"));
    }

    #[test]
    fn test_detailed_report_renders_driver_reports() {
        let report = microbench_core::run_benchmark().unwrap();
        let results = vec![
            BenchmarkResult::from_report(&report),
            BenchmarkResult::new("microbench/other", serde_json::json!({"status": "ok"})),
        ];
        let detailed = generate_detailed_report(&results);

        assert!(detailed.contains("## microbench/driver"));
        assert!(detailed.contains("| fibRecursive | 6765 | yes |"));
        assert!(detailed.contains("```json"));

        let first = detailed.find("| fibRecursive |").unwrap();
        let last = detailed.find("| matrixMultiply |").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_harness_summary_reports_memory() {
        let summary = HarnessSummary {
            iterations: 2,
            total_ms: 3.0,
            average_ms: 1.5,
            min_ms: 1.0,
            max_ms: 2.0,
            memory_used_bytes: 3072,
            last_report: microbench_core::run_benchmark().unwrap(),
        };
        let rendered = render_harness_summary(&summary);

        assert!(rendered.contains("- Iterations: 2"));
        assert!(rendered.contains("- Memory used: 3072 bytes (3.00 KB)"));
        assert!(rendered.contains("| stringOps | 5852 | yes |"));
    }
}
