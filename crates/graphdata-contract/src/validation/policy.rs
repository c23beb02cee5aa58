use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a validator does when it finds a condition governed by policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyAction {
    /// Accept silently
    Allow,
    /// Accept, but emit a `warn` event
    Warn,
    /// Report a validation error
    Reject,
}

impl FromStr for PolicyAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(PolicyAction::Allow),
            "warn" => Ok(PolicyAction::Warn),
            "reject" => Ok(PolicyAction::Reject),
            other => Err(format!("unknown policy action '{}', expected allow, warn or reject", other)),
        }
    }
}

/// Accepted range for edge weights. Non-finite weights are rejected under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Any finite number
    Any,
    /// Zero or greater
    NonNegative,
    /// Strictly greater than zero
    Positive,
}

impl WeightPolicy {
    pub fn accepts(&self, weight: f64) -> bool {
        if !weight.is_finite() {
            return false;
        }
        match self {
            WeightPolicy::Any => true,
            WeightPolicy::NonNegative => weight >= 0.0,
            WeightPolicy::Positive => weight > 0.0,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            WeightPolicy::Any => "a finite number",
            WeightPolicy::NonNegative => "a finite number >= 0",
            WeightPolicy::Positive => "a finite number > 0",
        }
    }
}

impl FromStr for WeightPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "any" => Ok(WeightPolicy::Any),
            "non_negative" => Ok(WeightPolicy::NonNegative),
            "positive" => Ok(WeightPolicy::Positive),
            other => Err(format!(
                "unknown weight policy '{}', expected any, non_negative or positive",
                other
            )),
        }
    }
}

/// Choices for the conditions the data contract itself leaves open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Handling of nodes that share an id
    #[serde(default = "default_duplicate_ids")]
    pub duplicate_ids: PolicyAction,

    /// Handling of edges whose source equals their target
    #[serde(default = "default_self_loops")]
    pub self_loops: PolicyAction,

    /// Accepted range for edge weights
    #[serde(default = "default_weights")]
    pub weights: WeightPolicy,

    /// Whether edge endpoints must resolve to existing node ids
    #[serde(default = "default_check_references")]
    pub check_references: bool,
}

fn default_duplicate_ids() -> PolicyAction {
    PolicyAction::Reject
}

fn default_self_loops() -> PolicyAction {
    PolicyAction::Allow
}

fn default_weights() -> WeightPolicy {
    WeightPolicy::NonNegative
}

fn default_check_references() -> bool {
    true
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            duplicate_ids: default_duplicate_ids(),
            self_loops: default_self_loops(),
            weights: default_weights(),
            check_references: default_check_references(),
        }
    }
}
