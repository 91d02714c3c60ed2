//! Run configuration.
//!
//! Settings are layered, lowest priority first:
//!
//! 1. Built-in defaults ([`Settings::default`])
//! 2. An optional TOML/YAML/JSON config file
//! 3. `ACCESS_LOG_*` environment variables (e.g. `ACCESS_LOG_THRESHOLD=5`)
//!
//! Command-line flags are applied on top by the binary. The resulting
//! value is passed explicitly to each stage of the pipeline.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_THRESHOLD;
use crate::error::Result;
use crate::log::ParsePolicy;
use crate::report::ReportFormat;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "ACCESS_LOG";

/// Log file read when no input is given.
pub const DEFAULT_INPUT: &str = "sample.log";

/// Report file written when no output is given.
pub const DEFAULT_OUTPUT: &str = "log_analysis_results.csv";

/// Everything a report run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Failed-login count an IP must exceed to be flagged.
    pub threshold: u64,
    /// Access log to analyze.
    pub input: PathBuf,
    /// Report file to write.
    pub output: PathBuf,
    /// Encoding of the report file.
    pub format: ReportFormat,
    /// Drop short lines instead of failing the run.
    pub skip_malformed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: ReportFormat::Csv,
            skip_malformed: false,
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file, and the environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_from(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(config_file: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Parse policy implied by `skip_malformed`.
    pub fn parse_policy(&self) -> ParsePolicy {
        if self.skip_malformed {
            ParsePolicy::SkipMalformed
        } else {
            ParsePolicy::FailFast
        }
    }
}
