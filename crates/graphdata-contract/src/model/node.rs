use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Attributes, MergeStrategy};

/// A graph vertex.
///
/// Only `id` is required. Anything else the producer attaches (labels,
/// styling, metadata) lands in `extra` and is written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Identifier of the node, expected to be unique within a graph
    pub id: String,

    /// Cluster the node belongs to; `None` means no cluster
    #[serde(rename = "clusterId", default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,

    /// Additional attributes not covered by the fields above
    #[serde(flatten)]
    pub extra: Attributes,
}

impl NodeConfig {
    /// Wire names claimed by the known fields of a node
    pub const RESERVED_KEYS: &'static [&'static str] = &["id", "clusterId"];

    pub fn new(id: impl Into<String>) -> Self {
        NodeConfig {
            id: id.into(),
            cluster_id: None,
            extra: Attributes::new(),
        }
    }

    pub fn with_cluster(mut self, cluster_id: impl Into<String>) -> Self {
        self.cluster_id = Some(cluster_id.into());
        self
    }

    /// Attach an extra attribute.
    ///
    /// Keys listed in [`NodeConfig::RESERVED_KEYS`] are ignored, since they
    /// would collide with the known fields once the node is encoded.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if Self::RESERVED_KEYS.contains(&key.as_str()) {
            tracing::debug!(node_id = %self.id, key = %key, "Ignoring reserved node attribute key");
            return self;
        }
        self.extra.insert(key, value);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Merge another description of the same node into this one.
    ///
    /// `id` is never changed. The cluster is taken from `other` only when
    /// the strategy is `Overwrite` or this node has no cluster yet.
    pub fn merge_from(&mut self, other: NodeConfig, strategy: MergeStrategy) {
        match (strategy, &self.cluster_id, other.cluster_id) {
            (MergeStrategy::Overwrite, _, Some(cluster)) => self.cluster_id = Some(cluster),
            (MergeStrategy::KeepExisting, None, Some(cluster)) => self.cluster_id = Some(cluster),
            _ => {}
        }
        self.extra.merge(other.extra, strategy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_with_only_id() {
        let node: NodeConfig = serde_json::from_value(json!({"id": "a"})).unwrap();
        assert_eq!(node.id, "a");
        assert!(node.cluster_id.is_none());
        assert!(node.extra.is_empty());
    }

    #[test]
    fn test_node_missing_id_rejected() {
        let result: Result<NodeConfig, _> = serde_json::from_value(json!({"clusterId": "c1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_cluster_id_wire_name() {
        let node = NodeConfig::new("b").with_cluster("c1");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!({"id": "b", "clusterId": "c1"}));
    }

    #[test]
    fn test_null_cluster_id_is_absent() {
        let node: NodeConfig = serde_json::from_value(json!({"id": "a", "clusterId": null})).unwrap();
        assert!(node.cluster_id.is_none());
    }

    #[test]
    fn test_extra_attributes_preserved() {
        let input = json!({
            "id": "a",
            "label": "Node A",
            "style": {"fill": "#1f77b4", "radius": 5},
            "tags": ["x", "y"]
        });
        let node: NodeConfig = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(node.attribute("label"), Some(&json!("Node A")));
        assert_eq!(node.extra.len(), 3);
        assert_eq!(serde_json::to_value(&node).unwrap(), input);
    }

    #[test]
    fn test_with_attribute_skips_reserved_keys() {
        let node = NodeConfig::new("a")
            .with_attribute("id", "other")
            .with_attribute("clusterId", "c9")
            .with_attribute("label", "A");
        assert_eq!(node.id, "a");
        assert!(node.cluster_id.is_none());
        assert_eq!(node.extra.len(), 1);
    }

    #[test]
    fn test_merge_from_keep_existing() {
        let mut node = NodeConfig::new("a").with_cluster("c1").with_attribute("label", "A");
        let other = NodeConfig::new("a")
            .with_cluster("c2")
            .with_attribute("label", "B")
            .with_attribute("size", 4);

        node.merge_from(other, MergeStrategy::KeepExisting);

        assert_eq!(node.cluster_id.as_deref(), Some("c1"));
        assert_eq!(node.attribute("label"), Some(&json!("A")));
        assert_eq!(node.attribute("size"), Some(&json!(4)));
    }

    #[test]
    fn test_merge_from_overwrite() {
        let mut node = NodeConfig::new("a").with_cluster("c1").with_attribute("label", "A");
        let other = NodeConfig::new("a").with_attribute("label", "B");

        node.merge_from(other, MergeStrategy::Overwrite);

        // An absent cluster on the incoming side does not clear ours
        assert_eq!(node.cluster_id.as_deref(), Some("c1"));
        assert_eq!(node.attribute("label"), Some(&json!("B")));
    }
}
