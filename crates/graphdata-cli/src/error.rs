//! Error types for graphcheck

use std::path::PathBuf;
use thiserror::Error;
use graphdata_contract::GraphError;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input or config file could not be read
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output could not be written
    #[error("Failed to write output: {0}")]
    WriteError(#[from] std::io::Error),

    /// The graph document failed to decode or validate
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Failed to encode a summary
    #[error("JSON encoding error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
