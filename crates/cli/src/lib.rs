//! CLI for Microbench.
//!
//! This crate provides the command-line interface, including the
//! canonical benchmark `run` subcommand.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use microbench_benchmarks::{io, markdown, OutputFormat, SuiteConfig};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Microbench CLI.
#[derive(Parser, Debug)]
#[command(name = "microbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML).
    #[arg(short, long, global = true, env = "MICROBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the benchmark harness and write results to the output directory.
    ///
    /// This command runs the driver repeatedly, then every workload target
    /// once, and writes:
    /// - <output>/raw/ - Individual JSON files per target
    /// - <output>/all_results.json - Combined JSON file
    /// - <output>/summary.md - Markdown summary
    /// - <output>/detailed.md - Detailed Markdown report
    Run {
        /// Output directory override (optional).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: json, markdown, or both.
        #[arg(short, long)]
        format: Option<String>,

        /// Number of driver runs.
        #[arg(short = 'n', long)]
        iterations: Option<u32>,

        /// Skip the per-workload targets.
        #[arg(long)]
        skip_targets: bool,

        /// Verbose output.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the driver once and print its report to stdout.
    Report {
        /// Pretty-print the JSON.
        #[arg(short, long)]
        pretty: bool,

        /// Print a Markdown table instead of JSON.
        #[arg(short, long, conflicts_with = "pretty")]
        markdown: bool,
    },

    /// Show benchmark status and configuration.
    Status {
        /// Show detailed status information.
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_level`. Logs go to stderr so report
/// output on stdout stays machine-readable.
pub fn init_tracing(default_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when embedded; keep it.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Apply `run` flag overrides on top of a loaded configuration.
pub fn apply_overrides(
    mut config: SuiteConfig,
    output: Option<PathBuf>,
    format: Option<&str>,
    iterations: Option<u32>,
) -> anyhow::Result<SuiteConfig> {
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(format) = format {
        config.format = format.parse::<OutputFormat>()?;
    }
    if let Some(iterations) = iterations {
        config.iterations = iterations;
    }
    config.validate()?;
    Ok(config)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SuiteConfig> {
    SuiteConfig::load(path).context("loading configuration")
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.log_level, cli.json_logs);

    execute(cli.command, config)
}

/// Execute a parsed command against a loaded configuration.
pub fn execute(command: Commands, config: SuiteConfig) -> anyhow::Result<()> {
    match command {
        Commands::Run {
            output,
            format,
            iterations,
            skip_targets,
            verbose,
        } => {
            let config = apply_overrides(config, output, format.as_deref(), iterations)?;

            if verbose {
                println!("Running benchmark ({} iterations)...", config.iterations);
            }

            let summary = microbench_benchmarks::run_iterations(config.iterations)?;
            let mut results = microbench_benchmarks::summary_results(&summary);
            if !skip_targets {
                results.extend(microbench_adapters::run_all_targets());
            }

            io::write_all_outputs(&results, &config.output_dir, config.format).with_context(
                || format!("writing results to {}", config.output_dir.display()),
            )?;
            info!(
                results = results.len(),
                output_dir = %config.output_dir.display(),
                "Benchmark results written"
            );

            println!("Completed {} benchmarks", results.len());
            println!("Results written to {}/", config.output_dir.display());

            if verbose {
                println!();
                print!("{}", markdown::render_harness_summary(&summary));
                for result in &results {
                    println!("  - {}: {}", result.target_id, result.metrics);
                }
            }

            Ok(())
        }
        Commands::Report {
            pretty,
            markdown: as_markdown,
        } => {
            let report = microbench_core::run_benchmark()?;

            if as_markdown {
                print!("{}", markdown::render_report(&report));
            } else if pretty {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", serde_json::to_string(&report)?);
            }

            Ok(())
        }
        Commands::Status { detailed } => {
            println!("Microbench Benchmark System");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("Iterations: {}", config.iterations);
            println!("Output format: {}", config.format);

            if detailed {
                let dir = config.output_dir.display();
                println!("\nWorkloads:");
                for workload in microbench_core::Workload::ALL {
                    println!("  - {} ({})", workload.key(), workload.parameter());
                }
                println!("\nOutput directories:");
                println!("  - {dir}/");
                println!("  - {dir}/{}/", io::RAW_DIR);
                println!("\nOutput files:");
                println!("  - {dir}/{}", io::SUMMARY_FILE);
                println!("  - {dir}/{}", io::DETAILED_FILE);
                println!("  - {dir}/{}", io::ALL_RESULTS_FILE);
            }

            Ok(())
        }
    }
}
