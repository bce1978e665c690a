//! Suite configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `MICROBENCH_*` environment variables. The workload parameters
//! themselves are fixed and cannot be configured.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Prefix of the environment variables read by [`SuiteConfig::load`].
pub const ENV_PREFIX: &str = "MICROBENCH";

/// Default number of harness iterations.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A loaded value is out of range.
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid {
        /// Offending key.
        key: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Which output files to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raw and combined JSON only.
    Json,
    /// Markdown summary only.
    Markdown,
    /// JSON and Markdown.
    #[default]
    Both,
}

impl OutputFormat {
    /// Whether JSON files are written.
    pub fn includes_json(&self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    /// Whether Markdown files are written.
    pub fn includes_markdown(&self) -> bool {
        matches!(self, Self::Markdown | Self::Both)
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "both" => Ok(Self::Both),
            other => Err(ConfigError::Invalid {
                key: "format",
                reason: format!("expected json, markdown or both, got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}

/// Harness and output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Number of driver runs per harness invocation.
    pub iterations: u32,
    /// Directory that receives the output files.
    pub output_dir: PathBuf,
    /// Which output files to write.
    pub format: OutputFormat,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            output_dir: PathBuf::from(crate::io::OUTPUT_DIR),
            format: OutputFormat::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl SuiteConfig {
    /// Load configuration from defaults, an optional file and the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(file, ENV_PREFIX)
    }

    /// Like [`SuiteConfig::load`] with a custom environment prefix.
    pub fn load_with_prefix(file: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("iterations", i64::from(defaults.iterations))?
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("format", defaults.format.to_string())?
            .set_default("log_level", defaults.log_level)?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let loaded: Self = builder
            .add_source(config::Environment::with_prefix(env_prefix))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject values the harness cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid {
                key: "iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                key: "output_dir",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SuiteConfig::load_with_prefix(None, "MICROBENCH_TEST_DEFAULTS").unwrap();
        assert_eq!(config, SuiteConfig::default());
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.output_dir, PathBuf::from("benchmarks/output"));
        assert_eq!(config.format, OutputFormat::Both);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "iterations = 25").unwrap();
        writeln!(file, "format = \"json\"").unwrap();

        let config =
            SuiteConfig::load_with_prefix(Some(file.path()), "MICROBENCH_TEST_FILE").unwrap();
        assert_eq!(config.iterations, 25);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        std::env::set_var("MICROBENCH_TEST_ENV_ITERATIONS", "7");
        std::env::set_var("MICROBENCH_TEST_ENV_OUTPUT_DIR", "out/bench");

        let config = SuiteConfig::load_with_prefix(None, "MICROBENCH_TEST_ENV").unwrap();
        assert_eq!(config.iterations, 7);
        assert_eq!(config.output_dir, PathBuf::from("out/bench"));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "iterations = 0").unwrap();

        let err =
            SuiteConfig::load_with_prefix(Some(file.path()), "MICROBENCH_TEST_ZERO").unwrap_err();
        assert!(err.to_string().contains("iterations"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = SuiteConfig::load_with_prefix(
            Some(Path::new("/nonexistent/microbench.toml")),
            "MICROBENCH_TEST_MISSING",
        );
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("both".parse::<OutputFormat>().unwrap(), OutputFormat::Both);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert!(OutputFormat::Both.includes_json());
        assert!(!OutputFormat::Json.includes_markdown());
    }
}
