//! CLI-specific error types

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that terminate the CLI with a non-zero exit
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Runtime or server failure
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
