use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How colliding keys are resolved when two attribute maps are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Keep the value already present on the receiving side
    #[default]
    KeepExisting,

    /// Replace the receiving side's value with the incoming one
    Overwrite,
}

/// Open set of extra attributes carried by a node or an edge.
///
/// Keys are arbitrary strings and values are unconstrained JSON values
/// (labels, colors, nested metadata). Insertion order is preserved so a
/// decoded record re-encodes with its keys in the order they arrived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Attributes(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert a value, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merge `other` into `self`.
    ///
    /// Keys that exist on only one side are always kept. For keys present on
    /// both sides the strategy decides which value survives. A merge never
    /// removes a key.
    pub fn merge(&mut self, other: Attributes, strategy: MergeStrategy) {
        for (key, value) in other.0 {
            match strategy {
                MergeStrategy::Overwrite => {
                    self.0.insert(key, value);
                }
                MergeStrategy::KeepExisting => {
                    self.0.entry(key).or_insert(value);
                }
            }
        }
    }

    /// Keys of this map that collide with any of `reserved`
    pub fn shadowed_keys<'a>(
        &'a self,
        reserved: &'a [&'a str],
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.keys().filter(move |key| reserved.contains(key))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(pairs: &[(&str, Value)]) -> Attributes {
        pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
    }

    #[test]
    fn test_merge_keep_existing() {
        let mut base = attrs(&[("label", json!("A")), ("color", json!("#fff"))]);
        let incoming = attrs(&[("label", json!("B")), ("size", json!(3))]);

        base.merge(incoming, MergeStrategy::KeepExisting);

        assert_eq!(base.len(), 3);
        assert_eq!(base.get("label"), Some(&json!("A")));
        assert_eq!(base.get("color"), Some(&json!("#fff")));
        assert_eq!(base.get("size"), Some(&json!(3)));
    }

    #[test]
    fn test_merge_overwrite() {
        let mut base = attrs(&[("label", json!("A")), ("color", json!("#fff"))]);
        let incoming = attrs(&[("label", json!("B")), ("size", json!(3))]);

        base.merge(incoming, MergeStrategy::Overwrite);

        assert_eq!(base.len(), 3);
        assert_eq!(base.get("label"), Some(&json!("B")));
        assert_eq!(base.get("color"), Some(&json!("#fff")));
    }

    #[test]
    fn test_merge_into_empty() {
        let mut base = Attributes::new();
        base.merge(attrs(&[("meta", json!({"nested": [1, 2]}))]), MergeStrategy::KeepExisting);
        assert_eq!(base.get("meta"), Some(&json!({"nested": [1, 2]})));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut map = Attributes::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        map.insert("mid", 3);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_shadowed_keys() {
        let map = attrs(&[("id", json!("x")), ("label", json!("y"))]);
        let shadowed: Vec<&str> = map.shadowed_keys(&["id", "clusterId"]).collect();
        assert_eq!(shadowed, vec!["id"]);
    }
}
