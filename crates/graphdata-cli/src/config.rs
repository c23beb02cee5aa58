//! Configuration for graphcheck
//!
//! Settings come from an optional YAML file and are then overridden by
//! `GRAPHCHECK_*` environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use graphdata_contract::validation::{PolicyAction, WeightPolicy};
use graphdata_contract::ValidationPolicy;

use crate::error::{CliError, CliResult};

/// graphcheck configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// tracing filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,

    /// Validation policy applied by `validate`
    #[serde(default)]
    pub policy: ValidationPolicy,

    /// Problems found while loading, reported once logging is up
    #[serde(skip)]
    pub warnings: Vec<String>,
}

fn default_log_filter() -> String {
    "warn,graphdata_contract=info,graphdata_cli=info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json_logs: false,
            policy: ValidationPolicy::default(),
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from an optional file and the process environment
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Parse a YAML config file
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|err| {
            CliError::ConfigError(format!("invalid config file {}: {}", path.display(), err))
        })
    }

    /// Override settings from variables returned by `lookup`.
    ///
    /// Invalid values keep the current setting and are recorded in `warnings`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup("GRAPHCHECK_LOG_FILTER") {
            self.log_filter = filter;
        }

        if let Some(json_logs) = lookup("GRAPHCHECK_JSON_LOGS") {
            self.json_logs = json_logs.to_lowercase() == "true" || json_logs == "1";
        }

        if let Some(value) = lookup("GRAPHCHECK_DUPLICATE_IDS") {
            match value.parse::<PolicyAction>() {
                Ok(action) => self.policy.duplicate_ids = action,
                Err(err) => self.warnings.push(format!("Invalid GRAPHCHECK_DUPLICATE_IDS value: {}", err)),
            }
        }

        if let Some(value) = lookup("GRAPHCHECK_SELF_LOOPS") {
            match value.parse::<PolicyAction>() {
                Ok(action) => self.policy.self_loops = action,
                Err(err) => self.warnings.push(format!("Invalid GRAPHCHECK_SELF_LOOPS value: {}", err)),
            }
        }

        if let Some(value) = lookup("GRAPHCHECK_WEIGHTS") {
            match value.parse::<WeightPolicy>() {
                Ok(policy) => self.policy.weights = policy,
                Err(err) => self.warnings.push(format!("Invalid GRAPHCHECK_WEIGHTS value: {}", err)),
            }
        }
    }
}
