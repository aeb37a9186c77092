//! Deterministic React source generation from a validated plan.
//!
//! The generator re-validates its input and renders props through the
//! sanitizer even though callers are expected to validate first; generation
//! is the last line of defense before the output reaches a renderer. Output
//! is byte-identical for structurally identical plans: props are emitted in
//! registry order and children in input order.

use crate::plan;
use crate::registry::{self, ComponentKind};
use crate::wire::{PlanNode, UiPlan};
use serde_json::Value;

/// Render a plan as a React component source file. An invalid plan produces
/// a fixed diagnostic stand-in carrying the full error list — never partial
/// output.
pub fn generate(plan: &UiPlan) -> String {
    let candidate = serde_json::to_value(plan).unwrap_or(Value::Null);
    let verdict = plan::validate(&candidate);
    if !verdict.is_valid {
        return format!(
            "/* Invalid UI plan:\n{} */\n\nexport default function GeneratedUI() {{\n  return <div>Invalid UI plan.</div>;\n}}",
            verdict.errors.join("\n")
        );
    }

    let rendered = plan
        .components
        .iter()
        .map(render_node)
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        "import React from 'react';\nimport {{ {} }} from '@/components/lib';\n\nexport default function GeneratedUI() {{\n  return (\n    <Layout type=\"{}\">\n      {}\n    </Layout>\n  );\n}}",
        registry::known_kinds().join(", "),
        plan.layout,
        rendered
    )
}

fn render_node(node: &PlanNode) -> String {
    let props_string = render_props(node);
    let props_string = if props_string.is_empty() {
        String::new()
    } else {
        format!(" {props_string}")
    };

    let children = node
        .children
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(render_node)
        .collect::<Vec<_>>()
        .join("\n        ");

    if children.trim().is_empty() {
        format!("<{}{props_string} />", node.kind)
    } else {
        format!(
            "<{kind}{props_string}>\n        {children}\n      </{kind}>",
            kind = node.kind
        )
    }
}

/// Serialize the sanitized props as `key={json}` pairs in registry order.
/// Never reads the raw props map directly.
fn render_props(node: &PlanNode) -> String {
    let safe = plan::sanitize(&node.kind, node.props.as_ref());
    let Some(kind) = ComponentKind::lookup(&node.kind) else {
        return String::new();
    };
    let mut parts = Vec::with_capacity(safe.len());
    for key in kind.spec().allowed_props {
        if let Some(value) = safe.get(*key) {
            parts.push(format!("{key}={{{value}}}"));
        }
    }
    parts.join(" ")
}
