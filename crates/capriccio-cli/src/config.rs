//! CLI configuration parsed from environment variables.
//!
//! Every setting can be given through an environment variable prefixed with
//! `CAPRICCIO_` and overridden by the matching command line flag.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "CAPRICCIO_LOG_LEVEL";

/// Environment variable holding the output format.
pub const FORMAT_VAR: &str = "CAPRICCIO_FORMAT";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that only skipped Examples blocks and failures are
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every grammar rule attempt.
    Trace,
    /// Debug-level information for development.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic input.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// How a parsed feature is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line for the feature and one per scenario.
    #[default]
    Summary,
    /// The whole document tree as pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown output format '{s}', expected one of: summary, json"
            ))),
        }
    }
}

/// Configuration for one CLI run.
///
/// # Environment Variables
///
/// - `CAPRICCIO_LOG_LEVEL`: Sets the log level (trace, debug, info, warn,
///   error)
/// - `CAPRICCIO_FORMAT`: Selects the output format (summary, json)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Output format (summary, json).
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a value is not recognised.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };
        let format = match lookup(FORMAT_VAR) {
            Some(val) => val.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self { log_level, format })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// Command line flags take precedence over environment-based values.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(format) = format {
            self.format = format;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
