use thiserror::Error;
use crate::validation::ValidationError;
use std::fmt;

/// All possible errors that can occur while decoding or validating graph data
#[derive(Error, Debug)]
pub enum GraphError {
    /// Errors that occur during YAML parsing
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Errors that occur during JSON processing
    #[error("JSON processing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A single validation error
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    /// Multiple validation errors
    #[error("{}", MultipleErrorsFormat(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Unknown document format name
    #[error("Unsupported graph format: {0}")]
    UnsupportedFormat(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

// Helper struct to format multiple errors
struct MultipleErrorsFormat<'a>(&'a [ValidationError]);

impl fmt::Display for MultipleErrorsFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors ({} issues):", self.0.len())?;
        for (i, err) in self.0.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, err)?;
        }
        Ok(())
    }
}

impl GraphError {
    /// Create a GraphError from a vector of validation errors
    pub fn from_validation_errors(mut errors: Vec<ValidationError>) -> Self {
        match errors.len() {
            0 => GraphError::InternalError("Called from_validation_errors with empty vector".to_string()),
            1 => GraphError::ValidationError(errors.remove(0)),
            _ => GraphError::MultipleValidationErrors(errors),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GraphError::YamlError(_) => "ERR_GRAPH_YAML_PARSE",
            GraphError::JsonError(_) => "ERR_GRAPH_JSON_PARSE",
            GraphError::ValidationError(err) => err.code,
            GraphError::MultipleValidationErrors(_) => "ERR_GRAPH_VALIDATION_MULTIPLE",
            GraphError::UnsupportedFormat(_) => "ERR_GRAPH_UNSUPPORTED_FORMAT",
            GraphError::InternalError(_) => "ERR_GRAPH_INTERNAL",
        }
    }

    /// All validation errors carried by this error, empty for other kinds
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            GraphError::ValidationError(err) => std::slice::from_ref(err),
            GraphError::MultipleValidationErrors(errors) => errors,
            _ => &[],
        }
    }
}
