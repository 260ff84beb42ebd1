//! Structured logging for the command line front end.
//!
//! Logs go to stderr so that stdout carries only the rendered document.
//! Records emitted through the `log` facade by the parser crates are
//! forwarded to the same subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level` (parsed into `config.log_level`)
/// 2. `CAPRICCIO_LOG_LEVEL` (parsed into `config.log_level`)
/// 3. Default configuration value
///
/// If a global subscriber or `log` logger is already installed the call does
/// nothing; the first one wins.
pub fn init_logging(config: &CliConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn init_logging_is_idempotent() {
        let config = CliConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn filter_uses_config_log_level() {
        let config = CliConfig::default().with_log_level(LogLevel::Debug);
        let filter = filter_from_config(&config);
        assert_eq!(filter.to_string(), "debug");
    }
}
