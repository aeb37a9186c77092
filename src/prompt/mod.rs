//! Prompt assembly for the planner and explainer calls.
//!
//! The component catalog is rendered from the registry so the instructions the
//! model sees and the whitelist the validator enforces cannot drift apart.

use crate::registry::{self, ComponentKind};

fn planner_rules() -> &'static str {
    r#"STRICT RULES:
1. You can ONLY use components from the catalog below.
2. You CANNOT invent CSS classes, inline styles, or new prop names.
3. You must output a single JSON object describing the layout structure.
4. Use only the listed props, and only the listed values where a prop has a fixed value set.

OUTPUT FORMAT (valid JSON only, no markdown, no code fences, no prose):
{
  "layout": "<one of the layout variants>",
  "components": [
    { "type": "Card", "props": { "title": "Title" }, "children": [] },
    { "type": "Button", "props": { "label": "Click", "variant": "primary", "size": "md" } }
  ]
}

CRITICAL: Return ONLY valid JSON. Start with { and end with }."#
}

/// Render one catalog entry per registry kind: its props, and the closed
/// value set for any enum-restricted prop.
fn component_catalog() -> String {
    let mut out = String::from("AVAILABLE COMPONENTS AND THEIR EXACT PROPS:\n");
    for kind in ComponentKind::ALL {
        let spec = kind.spec();
        out.push_str(&format!("\n{kind}:\n"));
        for prop in spec.allowed_props {
            match spec.allowed_values_for(prop) {
                Some(values) => out.push_str(&format!(
                    "- {prop}: MUST be one of: {}\n",
                    values
                        .iter()
                        .map(|v| format!("\"{v}\""))
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
                None => out.push_str(&format!("- {prop}: string\n")),
            }
        }
    }
    out.push_str(&format!(
        "\nLayout variants for the plan root: {}.\n",
        registry::layout_variants().join(", ")
    ));
    out
}

pub fn system_prompt_plan() -> String {
    format!(
        "You are the planner for a deterministic UI generator. Your job is to turn a user's request into a structured UI schema.\n\n{}\n\n{}",
        planner_rules(),
        component_catalog()
    )
}

pub fn user_prompt_plan(task: &str, previous_plan: Option<&str>) -> String {
    match previous_plan {
        Some(previous) => format!(
            "USER INTENT: \"{task}\"\n\nCURRENT UI PLAN (modify instead of rewrite; keep existing components unless the user asks to remove them):\n{previous}"
        ),
        None => format!("USER INTENT: \"{task}\"\n\nNo current UI plan. Create a new plan."),
    }
}

pub fn system_prompt_explain() -> &'static str {
    "You review UI plans. Explain in 2-3 sentences why the chosen components and layout solve the user's problem. Refer to the component choices explicitly. Plain prose, no JSON."
}

pub fn user_prompt_explain(task: &str, plan_json: &str) -> String {
    format!("User intent: \"{task}\"\nUI plan: {plan_json}")
}
