//! Structured logging setup using tracing.
//!
//! Logs go to stderr so that stdout carries only command output.

use anyhow::Context;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::CliConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(config: &CliConfig) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("Invalid log filter '{}'", config.log_filter))?,
    };

    let json_layer = config.json_logs.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(io::stderr)
    });

    let text_layer = (!config.json_logs).then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .context("Failed to set global default subscriber")?;

    tracing::debug!(
        log_format = if config.json_logs { "json" } else { "text" },
        "Logging initialized"
    );

    Ok(())
}
