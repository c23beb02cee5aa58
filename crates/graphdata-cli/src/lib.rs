//! graphcheck - command-line harness for the GraphData contract
//!
//! Reads a graph document, runs the contract's shape and validation passes,
//! and prints a normalized encoding or a summary.

/// Command-line arguments
pub mod cli;

/// Command implementations
pub mod commands;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

/// Logging module
pub mod logging;

// Re-export key types
pub use cli::{Cli, Commands};
pub use commands::{run, GraphStats};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
