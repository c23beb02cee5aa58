//! Structural shape check for loosely typed graph documents.
//!
//! Decoding straight into [`GraphData`](crate::GraphData) stops at the first
//! problem. [`check_shape`] walks the document instead and reports every
//! missing or mistyped known field, each with its location. Attributes
//! outside the known fields are never inspected.

use serde_json::{Map, Value};
use crate::validation::{error_codes, ValidationError};

/// The kind of JSON value a known field must hold
#[derive(Debug, Clone, Copy)]
enum Expected {
    String,
    Number,
}

impl Expected {
    fn matches(self, value: &Value) -> bool {
        match self {
            Expected::String => value.is_string(),
            Expected::Number => value.is_number(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Expected::String => "a string",
            Expected::Number => "a number",
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn type_error(path: String, expected: &str, found: &Value) -> ValidationError {
    ValidationError::at(
        error_codes::INVALID_TYPE,
        format!("Expected {}, found {}", expected, json_type_name(found)),
        path,
    )
}

fn check_required(
    record: &Map<String, Value>,
    field: &str,
    expected: Expected,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    match record.get(field) {
        None => errors.push(ValidationError::at(
            error_codes::MISSING_REQUIRED_FIELD,
            format!("Missing required field '{}'", field),
            format!("{}.{}", path, field),
        )),
        Some(value) if !expected.matches(value) => {
            errors.push(type_error(format!("{}.{}", path, field), expected.name(), value));
        }
        Some(_) => {}
    }
}

/// Optional fields may be absent or `null`
fn check_optional(
    record: &Map<String, Value>,
    field: &str,
    expected: Expected,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(value) = record.get(field) {
        if !value.is_null() && !expected.matches(value) {
            errors.push(type_error(format!("{}.{}", path, field), expected.name(), value));
        }
    }
}

/// Returns the records of `nodes`/`edges`, or `None` when the field is absent or null
fn collection<'a>(
    document: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<&'a Vec<Value>> {
    match document.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items),
        Some(other) => {
            errors.push(type_error(field.to_string(), "an array", other));
            None
        }
    }
}

/// Check that `document` has the GraphData shape.
///
/// Returns an empty vector when the document conforms.
pub fn check_shape(document: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(document) = document.as_object() else {
        errors.push(type_error("$".to_string(), "an object", document));
        return errors;
    };

    if let Some(nodes) = collection(document, "nodes", &mut errors) {
        for (idx, node) in nodes.iter().enumerate() {
            let path = format!("nodes[{}]", idx);
            match node.as_object() {
                Some(record) => {
                    check_required(record, "id", Expected::String, &path, &mut errors);
                    check_optional(record, "clusterId", Expected::String, &path, &mut errors);
                }
                None => errors.push(type_error(path, "an object", node)),
            }
        }
    }

    if let Some(edges) = collection(document, "edges", &mut errors) {
        for (idx, edge) in edges.iter().enumerate() {
            let path = format!("edges[{}]", idx);
            match edge.as_object() {
                Some(record) => {
                    check_required(record, "source", Expected::String, &path, &mut errors);
                    check_required(record, "target", Expected::String, &path, &mut errors);
                    check_optional(record, "weight", Expected::Number, &path, &mut errors);
                }
                None => errors.push(type_error(path, "an object", edge)),
            }
        }
    }

    errors
}
