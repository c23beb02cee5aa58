use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;

use graphdata_cli::{logging, run, Cli, CliConfig, CliError};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    logging::init_logging(&config)
        .context("Failed to initialize logging")?;

    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    let stdout = io::stdout();
    match run(&cli.command, &config, &mut stdout.lock()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(CliError::Graph(err)) if !err.validation_errors().is_empty() => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("graphcheck failed"),
    }
}
