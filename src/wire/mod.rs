use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// ========================================
/// Plan data model + provider envelope
/// ========================================

/// One UI element in a plan. `kind` is untrusted until validated against the
/// registry; `props` and `children` are treated as empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PlanNode>>,
}

/// Root plan structure: a layout variant plus the top-level components.
/// Immutable once validated — iteration replaces the whole plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPlan {
    pub layout: String,
    pub components: Vec<PlanNode>,
}

/// Outcome of one validation pass. Invariant: `is_valid == errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }
}

/// What we hand a provider adapter: prompt text only. The adapter owns the
/// HTTP shape; the raw completion text comes back as a plain `String`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_node_kind_serializes_as_type() {
        let node = PlanNode {
            kind: "Button".into(),
            props: None,
            children: None,
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!({ "type": "Button" }));
    }

    #[test]
    fn absent_props_and_children_round_trip() {
        let plan: UiPlan =
            serde_json::from_value(json!({ "layout": "grid", "components": [{ "type": "Card" }] }))
                .unwrap();
        assert_eq!(plan.components[0].props, None);
        assert_eq!(plan.components[0].children, None);
        let back = serde_json::to_value(&plan).unwrap();
        assert_eq!(back, json!({ "layout": "grid", "components": [{ "type": "Card" }] }));
    }
}
