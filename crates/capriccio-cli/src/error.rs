//! Error types for the command line front end.

use thiserror::Error;

/// Errors raised before a document reaches the parser.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
