mod edge;
mod node;

pub use edge::EdgeConfig;
pub use node::NodeConfig;

use serde::{Deserialize, Deserializer, Serialize};

/// The top-level graph container exchanged between producers and consumers.
///
/// Both collections are plain vectors. A document that omits `nodes` or
/// `edges`, or sets them to `null`, decodes to an empty vector, so
/// consumers never need to tell "absent" and "empty" apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    /// Nodes in producer order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nodes: Vec<NodeConfig>,

    /// Edges in producer order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub edges: Vec<EdgeConfig>,
}

impl GraphData {
    pub fn new(nodes: Vec<NodeConfig>, edges: Vec<EdgeConfig>) -> Self {
        GraphData { nodes, edges }
    }

    /// True when the graph has neither nodes nor edges
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// First node whose id equals `id`
    pub fn find_node(&self, id: &str) -> Option<&NodeConfig> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Node ids in producer order, duplicates included
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.id.as_str())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
