use std::fmt;
use std::error::Error;
use crate::error::GraphError;
use crate::model::GraphData;

mod policy;
mod reference;
mod structure;

pub use policy::{PolicyAction, ValidationPolicy, WeightPolicy};
pub use reference::{resolve_endpoints, EndpointResolution, ReferenceValidator};
pub use structure::StructureValidator;

/// Represents a problem found in a graph document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code (should be a constant identifier)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional path to the location of the error (e.g., "edges[2].source")
    pub path: Option<String>,
}

impl ValidationError {
    pub(crate) fn at(code: &'static str, message: impl Into<String>, path: impl Into<String>) -> Self {
        ValidationError {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl Error for ValidationError {}

/// Validation error codes
pub mod error_codes {
    /// Edge endpoint does not match any node id
    pub const INVALID_REFERENCE: &str = "ERR_GRAPH_VALIDATION_INVALID_REFERENCE";

    /// Two or more nodes share an id
    pub const DUPLICATE_ID: &str = "ERR_GRAPH_VALIDATION_DUPLICATE_ID";

    /// Required field absent from a node or edge
    pub const MISSING_REQUIRED_FIELD: &str = "ERR_GRAPH_VALIDATION_MISSING_REQUIRED_FIELD";

    /// Known field holds a value of the wrong JSON type
    pub const INVALID_TYPE: &str = "ERR_GRAPH_VALIDATION_INVALID_TYPE";

    /// Known field is well typed but unusable (e.g. empty id)
    pub const INVALID_VALUE: &str = "ERR_GRAPH_VALIDATION_INVALID_VALUE";

    /// Edge weight rejected by the weight policy
    pub const INVALID_WEIGHT: &str = "ERR_GRAPH_VALIDATION_INVALID_WEIGHT";

    /// Edge whose source and target are the same node
    pub const SELF_LOOP: &str = "ERR_GRAPH_VALIDATION_SELF_LOOP";

    /// Extra attribute that shadows a known field name
    pub const RESERVED_ATTRIBUTE: &str = "ERR_GRAPH_VALIDATION_RESERVED_ATTRIBUTE";
}

/// A trait for validators that check specific aspects of a graph
pub trait Validator {
    /// Validate the graph and return a list of validation errors (if any)
    fn validate(&self, graph: &GraphData) -> Vec<ValidationError>;
}

/// Run every validator enabled by `policy` against `graph`.
///
/// All findings are collected before returning, so one call reports every
/// problem rather than only the first.
pub fn validate_graph(graph: &GraphData, policy: &ValidationPolicy) -> Result<(), GraphError> {
    let mut validators: Vec<Box<dyn Validator>> = vec![
        Box::new(StructureValidator::new(policy.clone())),
    ];
    if policy.check_references {
        validators.push(Box::new(ReferenceValidator::new()));
    }

    let mut errors = Vec::new();
    for validator in validators {
        errors.extend(validator.validate(graph));
    }

    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "Graph validation failed");
        return Err(GraphError::from_validation_errors(errors));
    }

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Graph validation passed"
    );
    Ok(())
}
