use std::collections::HashMap;
use crate::model::{EdgeConfig, GraphData, NodeConfig};
use crate::validation::{error_codes, PolicyAction, ValidationError, ValidationPolicy, Validator};

/// Validates per-record structure and the policy-governed conditions:
/// - ids and endpoints must be non-empty
/// - duplicate node ids
/// - self-loop edges
/// - edge weight range
/// - extra attributes shadowing known field names
pub struct StructureValidator {
    policy: ValidationPolicy,
}

impl StructureValidator {
    /// Create a new structure validator using `policy`
    pub fn new(policy: ValidationPolicy) -> Self {
        StructureValidator { policy }
    }

    /// Apply a policy action to a finding. Returns the error to report, if any.
    fn apply(action: PolicyAction, error: ValidationError) -> Option<ValidationError> {
        match action {
            PolicyAction::Allow => None,
            PolicyAction::Warn => {
                tracing::warn!(code = error.code, path = ?error.path, "{}", error.message);
                None
            }
            PolicyAction::Reject => Some(error),
        }
    }

    fn validate_non_empty_fields(&self, graph: &GraphData) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (idx, node) in graph.nodes.iter().enumerate() {
            if node.id.is_empty() {
                errors.push(ValidationError::at(
                    error_codes::INVALID_VALUE,
                    "Node id must not be empty",
                    format!("nodes[{}].id", idx),
                ));
            }
        }

        for (idx, edge) in graph.edges.iter().enumerate() {
            for (field, value) in [("source", &edge.source), ("target", &edge.target)] {
                if value.is_empty() {
                    errors.push(ValidationError::at(
                        error_codes::INVALID_VALUE,
                        format!("Edge {} must not be empty", field),
                        format!("edges[{}].{}", idx, field),
                    ));
                }
            }
        }

        errors
    }

    /// Report each node id that appears more than once, at its repeated positions
    fn validate_unique_node_ids(&self, graph: &GraphData) -> Vec<ValidationError> {
        let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(graph.nodes.len());
        let mut errors = Vec::new();

        for (idx, node) in graph.nodes.iter().enumerate() {
            if let Some(&first) = first_seen.get(node.id.as_str()) {
                let error = ValidationError::at(
                    error_codes::DUPLICATE_ID,
                    format!(
                        "Duplicate node id '{}' - first defined at nodes[{}]",
                        node.id, first
                    ),
                    format!("nodes[{}].id", idx),
                );
                errors.extend(Self::apply(self.policy.duplicate_ids, error));
            } else {
                first_seen.insert(node.id.as_str(), idx);
            }
        }

        errors
    }

    fn validate_self_loops(&self, graph: &GraphData) -> Vec<ValidationError> {
        graph.edges.iter()
            .enumerate()
            .filter(|(_, edge)| edge.is_self_loop())
            .filter_map(|(idx, edge)| {
                let error = ValidationError::at(
                    error_codes::SELF_LOOP,
                    format!("Edge connects node '{}' to itself", edge.source),
                    format!("edges[{}]", idx),
                );
                Self::apply(self.policy.self_loops, error)
            })
            .collect()
    }

    fn validate_weights(&self, graph: &GraphData) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (idx, edge) in graph.edges.iter().enumerate() {
            if let Some(weight) = edge.weight_f64() {
                if !self.policy.weights.accepts(weight) {
                    errors.push(ValidationError::at(
                        error_codes::INVALID_WEIGHT,
                        format!(
                            "Edge weight {} from '{}' to '{}' must be {}",
                            weight, edge.source, edge.target, self.policy.weights.describe()
                        ),
                        format!("edges[{}].weight", idx),
                    ));
                }
            }
        }

        errors
    }

    fn validate_reserved_attributes(&self, graph: &GraphData) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (idx, node) in graph.nodes.iter().enumerate() {
            for key in node.extra.shadowed_keys(NodeConfig::RESERVED_KEYS) {
                errors.push(ValidationError::at(
                    error_codes::RESERVED_ATTRIBUTE,
                    format!("Extra attribute '{}' on node '{}' shadows a known field", key, node.id),
                    format!("nodes[{}].{}", idx, key),
                ));
            }
        }

        for (idx, edge) in graph.edges.iter().enumerate() {
            for key in edge.extra.shadowed_keys(EdgeConfig::RESERVED_KEYS) {
                errors.push(ValidationError::at(
                    error_codes::RESERVED_ATTRIBUTE,
                    format!("Extra attribute '{}' on edge shadows a known field", key),
                    format!("edges[{}].{}", idx, key),
                ));
            }
        }

        errors
    }
}

impl Validator for StructureValidator {
    fn validate(&self, graph: &GraphData) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        errors.extend(self.validate_non_empty_fields(graph));
        errors.extend(self.validate_unique_node_ids(graph));
        errors.extend(self.validate_self_loops(graph));
        errors.extend(self.validate_weights(graph));
        errors.extend(self.validate_reserved_attributes(graph));

        errors
    }
}
