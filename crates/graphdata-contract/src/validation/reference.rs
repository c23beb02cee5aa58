use std::collections::HashSet;
use crate::model::GraphData;
use crate::validation::{error_codes, ValidationError, Validator};

/// Whether each endpoint of one edge names an existing node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointResolution {
    /// Position of the edge in `GraphData::edges`
    pub edge_index: usize,
    pub source_found: bool,
    pub target_found: bool,
}

impl EndpointResolution {
    pub fn is_resolved(&self) -> bool {
        self.source_found && self.target_found
    }
}

/// Resolve the endpoints of every edge against the graph's node ids
pub fn resolve_endpoints(graph: &GraphData) -> Vec<EndpointResolution> {
    let node_ids: HashSet<&str> = graph.node_ids().collect();

    graph.edges.iter()
        .enumerate()
        .map(|(edge_index, edge)| EndpointResolution {
            edge_index,
            source_found: node_ids.contains(edge.source.as_str()),
            target_found: node_ids.contains(edge.target.as_str()),
        })
        .collect()
}

/// Validates that edge `source` and `target` reference existing node ids
pub struct ReferenceValidator;

impl ReferenceValidator {
    /// Create a new reference validator
    pub fn new() -> Self {
        ReferenceValidator
    }
}

impl Default for ReferenceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ReferenceValidator {
    fn validate(&self, graph: &GraphData) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for resolution in resolve_endpoints(graph) {
            let edge = &graph.edges[resolution.edge_index];
            let endpoints = [
                ("source", &edge.source, resolution.source_found),
                ("target", &edge.target, resolution.target_found),
            ];

            for (field, node_id, found) in endpoints {
                if !found {
                    errors.push(ValidationError::at(
                        error_codes::INVALID_REFERENCE,
                        format!("Edge {} '{}' does not match any node id", field, node_id),
                        format!("edges[{}].{}", resolution.edge_index, field),
                    ));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EdgeConfig, NodeConfig};

    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> GraphData {
        GraphData::new(
            nodes.iter().map(|id| NodeConfig::new(*id)).collect(),
            edges.iter().map(|(s, t)| EdgeConfig::new(*s, *t)).collect(),
        )
    }

    #[test]
    fn test_resolved_edges() {
        let g = graph(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let resolutions = resolve_endpoints(&g);
        assert_eq!(resolutions.len(), 2);
        assert!(resolutions.iter().all(EndpointResolution::is_resolved));
        assert!(ReferenceValidator::new().validate(&g).is_empty());
    }

    #[test]
    fn test_dangling_endpoints() {
        let g = graph(&["a"], &[("a", "ghost"), ("x", "y")]);

        let resolutions = resolve_endpoints(&g);
        assert_eq!(
            resolutions[0],
            EndpointResolution { edge_index: 0, source_found: true, target_found: false }
        );
        assert!(!resolutions[1].source_found && !resolutions[1].target_found);

        let errors = ReferenceValidator::new().validate(&g);
        assert_eq!(errors.len(), 3, "every dangling endpoint is reported");
        assert!(errors.iter().all(|e| e.code == error_codes::INVALID_REFERENCE));
        assert_eq!(errors[0].path.as_deref(), Some("edges[0].target"));
        assert!(errors[0].message.contains("ghost"));
    }

    #[test]
    fn test_edges_without_nodes() {
        let g = graph(&[], &[("x", "y")]);
        assert_eq!(ReferenceValidator::new().validate(&g).len(), 2);
    }

    #[test]
    fn test_empty_graph() {
        let g = GraphData::default();
        assert!(resolve_endpoints(&g).is_empty());
        assert!(ReferenceValidator::new().validate(&g).is_empty());
    }
}
