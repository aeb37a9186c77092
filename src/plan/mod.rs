//! Plan validation and prop sanitization.
//!
//! `validate` is the strict pass: it walks an untrusted candidate plan
//! depth-first and reports every violation with a fully-qualified path, so a
//! caller can show the complete diagnostic instead of the first failure.
//! `sanitize` is the lenient pass: a whitelist projection applied again at
//! generation time, independent of whether validation already ran. The two
//! policies are deliberately separate — do not fold one into the other.

use crate::registry::{self, ComponentKind};
use crate::wire::ValidationResult;
use serde_json::{Map, Value};

/// Props that must hold string values wherever they appear, regardless of the
/// component kind carrying them.
const STRING_PROPS: &[&str] = &[
    "label",
    "placeholder",
    "title",
    "description",
    "content",
    "caption",
];

/// Validate an untrusted candidate plan. Total over all JSON shapes: any
/// input yields a `ValidationResult`, never a panic.
pub fn validate(candidate: &Value) -> ValidationResult {
    let Some(root) = candidate.as_object() else {
        return ValidationResult::from_errors(vec!["Plan must be an object.".to_string()]);
    };

    let mut errors = Vec::new();

    let layout_ok = matches!(
        root.get("layout").and_then(Value::as_str),
        Some(layout) if registry::layout_variants().contains(&layout)
    );
    if !layout_ok {
        errors.push(format!(
            "Plan.layout must be one of: {}.",
            registry::layout_variants().join(", ")
        ));
    }

    match root.get("components") {
        Some(Value::Array(nodes)) => {
            for (index, node) in nodes.iter().enumerate() {
                validate_node(node, &format!("components[{index}]"), &mut errors);
            }
        }
        _ => errors.push("Plan.components must be an array.".to_string()),
    }

    ValidationResult::from_errors(errors)
}

fn validate_node(node: &Value, path: &str, errors: &mut Vec<String>) {
    let Some(obj) = node.as_object() else {
        errors.push(format!("{path} must be an object."));
        return;
    };

    // Unknown kind: report and stop descending; the subtree is not checked.
    let kind = match obj
        .get("type")
        .and_then(Value::as_str)
        .and_then(ComponentKind::lookup)
    {
        Some(kind) => kind,
        None => {
            errors.push(format!("{path}.type must be a whitelisted component."));
            return;
        }
    };

    let empty = Map::new();
    // A null or missing props field is an empty map; any other non-object is
    // an error, and prop checks are skipped for it. Children are still
    // checked either way — props and children fail independently.
    let props: Option<&Map<String, Value>> = match obj.get("props") {
        None | Some(Value::Null) => Some(&empty),
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            errors.push(format!("{path}.props must be an object when provided."));
            None
        }
    };

    if let Some(props) = props {
        validate_props(kind, props, path, errors);
    }

    match obj.get("children") {
        None => {}
        Some(Value::Array(children)) => {
            for (index, child) in children.iter().enumerate() {
                validate_node(child, &format!("{path}.children[{index}]"), errors);
            }
        }
        Some(_) => errors.push(format!("{path}.children must be an array when provided.")),
    }
}

fn validate_props(
    kind: ComponentKind,
    props: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<String>,
) {
    let spec = kind.spec();

    for key in props.keys() {
        if !spec.allows_prop(key) {
            errors.push(format!("{path}.props.{key} is not allowed for {kind}."));
        }
    }

    // Closed enumerations apply only to string values; non-string values for
    // these props are caught (or not) by the string-prop guard below.
    for (prop, allowed) in spec.allowed_values {
        if let Some(Value::String(value)) = props.get(*prop) {
            if !allowed.contains(&value.as_str()) {
                errors.push(format!(
                    "{path}.props.{prop} must be one of: {}.",
                    allowed.join(", ")
                ));
            }
        }
    }

    for (key, value) in props {
        if STRING_PROPS.contains(&key.as_str()) && !value.is_string() {
            errors.push(format!("{path}.props.{key} must be a string."));
        }
    }

    if kind == ComponentKind::Table {
        let headers_ok = matches!(
            props.get("headers"),
            Some(Value::Array(cells)) if cells.iter().all(Value::is_string)
        );
        if !headers_ok {
            errors.push(format!("{path}.props.headers must be an array of strings."));
        }

        let rows_ok = matches!(
            props.get("rows"),
            Some(Value::Array(rows)) if rows.iter().all(|row| {
                matches!(row, Value::Array(cells) if cells.iter().all(Value::is_string))
            })
        );
        if !rows_ok {
            errors.push(format!("{path}.props.rows must be an array of string arrays."));
        }
    }
}

/// Project `props` down to the keys the registry allows for `kind`, keeping
/// values untouched and dropping everything else silently. Safe on raw
/// untrusted input: an unknown kind or absent map yields an empty map.
pub fn sanitize(kind: &str, props: Option<&Map<String, Value>>) -> Map<String, Value> {
    let mut safe = Map::new();
    let Some(kind) = ComponentKind::lookup(kind) else {
        return safe;
    };
    let Some(props) = props else {
        return safe;
    };
    for key in kind.spec().allowed_props {
        if let Some(value) = props.get(*key) {
            safe.insert((*key).to_string(), value.clone());
        }
    }
    safe
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn errors_of(value: Value) -> Vec<String> {
        validate(&value).errors
    }

    #[test]
    fn accepts_a_fully_whitelisted_plan() {
        let result = validate(&json!({
            "layout": "grid",
            "components": [
                {
                    "type": "Card",
                    "props": { "title": "Stats", "description": "Weekly numbers" },
                    "children": [
                        { "type": "Button", "props": { "label": "Go", "variant": "primary", "size": "md" } }
                    ]
                },
                { "type": "Input", "props": { "label": "Email", "type": "email" } }
            ]
        }));
        assert_eq!(result.errors, Vec::<String>::new());
        assert!(result.is_valid);
    }

    #[test]
    fn non_object_roots_short_circuit() {
        for candidate in [json!(null), json!([]), json!(42), json!("plan")] {
            assert_eq!(errors_of(candidate), vec!["Plan must be an object.".to_string()]);
        }
    }

    #[test]
    fn unknown_layout_names_the_allowed_set() {
        let errors = errors_of(json!({ "layout": "circle", "components": [] }));
        assert_eq!(
            errors,
            vec!["Plan.layout must be one of: grid, flex, sidebar-layout.".to_string()]
        );
    }

    #[test]
    fn missing_layout_is_reported_like_a_wrong_one() {
        let errors = errors_of(json!({ "components": [] }));
        assert_eq!(
            errors,
            vec!["Plan.layout must be one of: grid, flex, sidebar-layout.".to_string()]
        );
    }

    #[test]
    fn non_array_components_skips_traversal() {
        let errors = errors_of(json!({ "layout": "flex", "components": { "type": "Button" } }));
        assert_eq!(errors, vec!["Plan.components must be an array.".to_string()]);
    }

    #[test]
    fn unknown_kind_stops_descent_into_children() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{
                "type": "Chart",
                "children": [{ "type": "AlsoUnknown" }]
            }]
        }));
        assert_eq!(
            errors,
            vec!["components[0].type must be a whitelisted component.".to_string()]
        );
    }

    #[test]
    fn extra_prop_yields_exactly_one_error() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{
                "type": "Button",
                "props": { "label": "Go", "variant": "primary", "size": "md", "extra": "x" }
            }]
        }));
        assert_eq!(
            errors,
            vec!["components[0].props.extra is not allowed for Button.".to_string()]
        );
    }

    #[test]
    fn each_extra_prop_gets_its_own_error() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{ "type": "Card", "props": { "onClick": "x", "style": "y" } }]
        }));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&"components[0].props.onClick is not allowed for Card.".to_string()));
        assert!(errors.contains(&"components[0].props.style is not allowed for Card.".to_string()));
    }

    #[test]
    fn enum_props_reject_values_outside_the_set() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{ "type": "Button", "props": { "variant": "danger" } }]
        }));
        assert_eq!(
            errors,
            vec!["components[0].props.variant must be one of: primary, secondary, outline.".to_string()]
        );
    }

    #[test]
    fn non_string_enum_values_are_not_value_checked() {
        // `variant` is enum-restricted but not a known string prop, so a
        // numeric value passes through both guards.
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{ "type": "Button", "props": { "variant": 3 } }]
        }));
        assert_eq!(errors, Vec::<String>::new());
    }

    #[test]
    fn known_string_props_must_be_strings() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{ "type": "Card", "props": { "title": 42 } }]
        }));
        assert_eq!(
            errors,
            vec!["components[0].props.title must be a string.".to_string()]
        );
    }

    #[test]
    fn bad_props_still_descends_into_children() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{
                "type": "Card",
                "props": ["not", "a", "map"],
                "children": [{ "type": "Chart" }]
            }]
        }));
        assert_eq!(
            errors,
            vec![
                "components[0].props must be an object when provided.".to_string(),
                "components[0].children[0].type must be a whitelisted component.".to_string(),
            ]
        );
    }

    #[test]
    fn null_props_counts_as_empty() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{ "type": "Card", "props": null }]
        }));
        assert_eq!(errors, Vec::<String>::new());
    }

    #[test]
    fn ragged_all_string_table_rows_validate() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{
                "type": "Table",
                "props": { "headers": ["A", "B"], "rows": [["1"], ["2", "3"]] }
            }]
        }));
        assert_eq!(errors, Vec::<String>::new());
    }

    #[test]
    fn table_without_props_reports_headers_and_rows() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{ "type": "Table" }]
        }));
        assert_eq!(
            errors,
            vec![
                "components[0].props.headers must be an array of strings.".to_string(),
                "components[0].props.rows must be an array of string arrays.".to_string(),
            ]
        );
    }

    #[test]
    fn table_rejects_non_string_cells() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{
                "type": "Table",
                "props": { "headers": ["A", 2], "rows": [["1", true]] }
            }]
        }));
        assert_eq!(
            errors,
            vec![
                "components[0].props.headers must be an array of strings.".to_string(),
                "components[0].props.rows must be an array of string arrays.".to_string(),
            ]
        );
    }

    #[test]
    fn non_array_children_is_an_error() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{ "type": "Card", "children": { "type": "Button" } }]
        }));
        assert_eq!(
            errors,
            vec!["components[0].children must be an array when provided.".to_string()]
        );
    }

    #[test]
    fn nested_paths_are_fully_qualified() {
        let errors = errors_of(json!({
            "layout": "grid",
            "components": [{
                "type": "Card",
                "children": [
                    { "type": "Button" },
                    { "type": "Card", "children": [ "not an object" ] }
                ]
            }]
        }));
        assert_eq!(
            errors,
            vec!["components[0].children[1].children[0] must be an object.".to_string()]
        );
    }

    #[test]
    fn all_errors_are_collected_across_the_tree() {
        let errors = errors_of(json!({
            "layout": "spiral",
            "components": [
                { "type": "Gauge" },
                { "type": "Button", "props": { "label": 7, "weight": "bold" } }
            ]
        }));
        assert_eq!(
            errors,
            vec![
                "Plan.layout must be one of: grid, flex, sidebar-layout.".to_string(),
                "components[0].type must be a whitelisted component.".to_string(),
                "components[1].props.weight is not allowed for Button.".to_string(),
                "components[1].props.label must be a string.".to_string(),
            ]
        );
    }

    #[test]
    fn sanitize_is_a_pure_projection() {
        let props = json!({ "label": "Go", "variant": "primary", "extra": "x", "onClick": "evil()" });
        let props = props.as_object().unwrap();
        let safe = sanitize("Button", Some(props));
        assert_eq!(safe.len(), 2);
        assert_eq!(safe.get("label"), Some(&json!("Go")));
        assert_eq!(safe.get("variant"), Some(&json!("primary")));
        assert_eq!(safe.get("extra"), None);
        assert_eq!(safe.get("onClick"), None);
    }

    #[test]
    fn sanitize_preserves_values_unchanged() {
        let props = json!({ "headers": ["A"], "rows": [["1", "2"]], "caption": 9 });
        let safe = sanitize("Table", props.as_object());
        assert_eq!(safe.get("rows"), Some(&json!([["1", "2"]])));
        // Projection, not transformation: even an invalid value passes through.
        assert_eq!(safe.get("caption"), Some(&json!(9)));
    }

    #[test]
    fn sanitize_handles_unknown_kind_and_absent_props() {
        let props = json!({ "label": "x" });
        assert!(sanitize("Chart", props.as_object()).is_empty());
        assert!(sanitize("Button", None).is_empty());
    }
}
