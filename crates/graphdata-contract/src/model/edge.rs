use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::types::Attributes;

/// A connection between two nodes, referenced by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Id of the node the edge starts at
    pub source: String,

    /// Id of the node the edge ends at
    pub target: String,

    /// Strength or cost of the edge; `None` means the consumer's default.
    /// Kept as a JSON number so integers re-encode exactly as they arrived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Number>,

    /// Additional attributes not covered by the fields above
    #[serde(flatten)]
    pub extra: Attributes,
}

impl EdgeConfig {
    /// Wire names claimed by the known fields of an edge
    pub const RESERVED_KEYS: &'static [&'static str] = &["source", "target", "weight"];

    /// Weight assumed for an edge that does not carry one
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        EdgeConfig {
            source: source.into(),
            target: target.into(),
            weight: None,
            extra: Attributes::new(),
        }
    }

    /// Set the weight. A non-finite value has no JSON form and leaves the weight unset.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Number::from_f64(weight);
        if self.weight.is_none() {
            tracing::debug!(
                source = %self.source,
                target = %self.target,
                weight,
                "Ignoring non-finite edge weight"
            );
        }
        self
    }

    /// The weight as a float, if set
    pub fn weight_f64(&self) -> Option<f64> {
        self.weight.as_ref().and_then(Number::as_f64)
    }

    /// Attach an extra attribute. Reserved keys are ignored.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if Self::RESERVED_KEYS.contains(&key.as_str()) {
            tracing::debug!(
                source = %self.source,
                target = %self.target,
                key = %key,
                "Ignoring reserved edge attribute key"
            );
            return self;
        }
        self.extra.insert(key, value);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// The edge weight, or [`EdgeConfig::DEFAULT_WEIGHT`] when unset
    pub fn weight_or_default(&self) -> f64 {
        self.weight_f64().unwrap_or(Self::DEFAULT_WEIGHT)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
