use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

use crate::conformance::check_shape;
use crate::error::GraphError;
use crate::model::GraphData;
use crate::validation::{error_codes, ValidationError};

/// Text encodings a graph document can be read from or written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphFormat {
    #[default]
    Json,
    Yaml,
}

impl GraphFormat {
    /// Infer the format from a file extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for GraphFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            _ => Err(GraphError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Json => write!(f, "json"),
            GraphFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Decode text into an untyped document without checking its shape.
///
/// YAML can spell `.nan` and `.inf`, which JSON cannot hold. Such values are
/// reported as `INVALID_VALUE` at their location instead of being converted.
pub fn parse_document(input: &str, format: GraphFormat) -> Result<Value, GraphError> {
    match format {
        GraphFormat::Json => Ok(serde_json::from_str(input)?),
        GraphFormat::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(input)?;
            let mut errors = Vec::new();
            collect_non_finite(&yaml, "", &mut errors);
            if !errors.is_empty() {
                return Err(GraphError::from_validation_errors(errors));
            }
            Ok(serde_json::to_value(yaml)?)
        }
    }
}

fn yaml_key(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        _ => "?".to_string(),
    }
}

fn collect_non_finite(value: &serde_yaml::Value, path: &str, errors: &mut Vec<ValidationError>) {
    match value {
        serde_yaml::Value::Number(n) if n.is_nan() || n.is_infinite() => {
            let location = if path.is_empty() { "$" } else { path };
            errors.push(ValidationError::at(
                error_codes::INVALID_VALUE,
                format!("Non-finite number {} cannot be represented", n),
                location,
            ));
        }
        serde_yaml::Value::Sequence(items) => {
            for (idx, item) in items.iter().enumerate() {
                collect_non_finite(item, &format!("{}[{}]", path, idx), errors);
            }
        }
        serde_yaml::Value::Mapping(entries) => {
            for (key, item) in entries {
                let key = yaml_key(key);
                let child = if path.is_empty() { key } else { format!("{}.{}", path, key) };
                collect_non_finite(item, &child, errors);
            }
        }
        serde_yaml::Value::Tagged(tagged) => collect_non_finite(&tagged.value, path, errors),
        _ => {}
    }
}

/// Convert an untyped document into `GraphData`.
///
/// The shape is checked first so that every structural problem is reported
/// at once, each with its location.
pub fn graph_from_value(document: Value) -> Result<GraphData, GraphError> {
    let errors = check_shape(&document);
    if !errors.is_empty() {
        return Err(GraphError::from_validation_errors(errors));
    }

    let graph: GraphData = serde_json::from_value(document)?;
    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Decoded graph document"
    );
    Ok(graph)
}

/// Parse a JSON or YAML string into `GraphData`.
///
/// This covers syntax and shape only. Referential integrity and the other
/// policy checks live in [`crate::validation`] and must be requested
/// separately.
pub fn parse_graph_data(input: &str, format: GraphFormat) -> Result<GraphData, GraphError> {
    graph_from_value(parse_document(input, format)?)
}

/// Encode `GraphData` back to text. Extra attributes are written unchanged.
pub fn to_string(graph: &GraphData, format: GraphFormat, pretty: bool) -> Result<String, GraphError> {
    let output = match (format, pretty) {
        (GraphFormat::Json, true) => serde_json::to_string_pretty(graph)?,
        (GraphFormat::Json, false) => serde_json::to_string(graph)?,
        (GraphFormat::Yaml, _) => serde_yaml::to_string(graph)?,
    };
    Ok(output)
}
