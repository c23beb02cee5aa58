//! # GraphData Contract
//!
//! Shared data contract for graphs passed from a producer (a loader or query
//! layer) to a consumer (a renderer or analysis step). The crate defines the
//! shapes, a JSON/YAML codec, and an opt-in validation pass. It has no graph
//! algorithms.
//!
//! ## Features
//!
//! * `NodeConfig` / `EdgeConfig` records that keep unrecognized attributes
//! * `GraphData` container where absent collections decode as empty
//! * Shape checking that reports every structural problem with its path
//! * Opt-in validation of referential integrity, duplicate ids, self-loops
//!   and weights, driven by a configurable `ValidationPolicy`
//!
//! ## Example
//!
//! ```
//! use graphdata_contract::{parse_and_validate_graph, GraphFormat, ValidationPolicy};
//!
//! let json = r#"{
//!     "nodes": [{"id": "a"}, {"id": "b", "clusterId": "c1", "label": "B"}],
//!     "edges": [{"source": "a", "target": "b", "weight": 2.5}]
//! }"#;
//!
//! let graph = parse_and_validate_graph(json, GraphFormat::Json, &ValidationPolicy::default()).unwrap();
//! assert_eq!(graph.nodes[1].cluster_id.as_deref(), Some("c1"));
//! assert_eq!(graph.nodes[1].attribute("label"), Some(&serde_json::json!("B")));
//! ```

mod error;
mod types;

pub mod conformance;
pub mod model;
pub mod parser;
pub mod validation;

pub use error::GraphError;
pub use model::{EdgeConfig, GraphData, NodeConfig};
pub use parser::{graph_from_value, parse_graph_data, to_string, GraphFormat};
pub use types::{Attributes, MergeStrategy};
pub use validation::{validate_graph, ValidationError, ValidationPolicy};

/// Parse and validate a graph document.
///
/// This function runs both stages of the contract:
/// 1. Decodes the text and checks its shape
/// 2. Runs the validators enabled by `policy`
/// 3. Returns the typed `GraphData` or every problem found
///
/// # Errors
///
/// * Invalid JSON or YAML syntax
/// * Missing or mistyped known fields
/// * Validation failures (dangling edge endpoints, duplicate ids, rejected weights)
///
/// # Examples
///
/// Handling validation errors:
///
/// ```
/// use graphdata_contract::{parse_and_validate_graph, GraphFormat, ValidationPolicy};
///
/// // The edge points at a node that does not exist
/// let yaml = r#"
/// nodes:
///   - id: a
/// edges:
///   - source: a
///     target: ghost
/// "#;
///
/// let result = parse_and_validate_graph(yaml, GraphFormat::Yaml, &ValidationPolicy::default());
/// assert!(result.is_err());
///
/// if let Err(error) = result {
///     assert!(error.error_code().contains("INVALID_REFERENCE"));
/// }
/// ```
pub fn parse_and_validate_graph(
    input: &str,
    format: GraphFormat,
    policy: &ValidationPolicy,
) -> Result<GraphData, GraphError> {
    let graph = parser::parse_graph_data(input, format)?;

    validation::validate_graph(&graph, policy)?;

    Ok(graph)
}

/// Returns the version of this crate as defined in Cargo.toml
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
