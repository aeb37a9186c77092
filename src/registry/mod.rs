//! Component registry: the closed set of renderable kinds and, per kind, the
//! whitelisted prop names and closed enumerations of prop values.
//!
//! Everything downstream (validation, sanitization, code generation, prompt
//! construction) keys off this table. A kind, prop, or value not listed here
//! does not exist as far as the rest of the crate is concerned.

use crate::errors::UiforgeError;
use std::fmt;
use std::str::FromStr;

/// Per-kind whitelist. Invariant: every key in `allowed_values` also appears
/// in `allowed_props`.
#[derive(Debug, Clone, Copy)]
pub struct ComponentSpec {
    pub allowed_props: &'static [&'static str],
    pub allowed_values: &'static [(&'static str, &'static [&'static str])],
}

impl ComponentSpec {
    pub fn allows_prop(&self, name: &str) -> bool {
        self.allowed_props.contains(&name)
    }

    /// The closed value set for `prop`, if it has one.
    pub fn allowed_values_for(&self, prop: &str) -> Option<&'static [&'static str]> {
        self.allowed_values
            .iter()
            .find(|(name, _)| *name == prop)
            .map(|(_, values)| *values)
    }
}

static BUTTON: ComponentSpec = ComponentSpec {
    allowed_props: &["label", "variant", "size"],
    allowed_values: &[
        ("variant", &["primary", "secondary", "outline"]),
        ("size", &["sm", "md", "lg"]),
    ],
};

static CARD: ComponentSpec = ComponentSpec {
    allowed_props: &["title", "description", "content"],
    allowed_values: &[],
};

static INPUT: ComponentSpec = ComponentSpec {
    allowed_props: &["label", "placeholder", "type"],
    allowed_values: &[(
        "type",
        &["text", "email", "password", "number", "search", "tel", "url"],
    )],
};

static TABLE: ComponentSpec = ComponentSpec {
    allowed_props: &["headers", "rows", "caption"],
    allowed_values: &[],
};

static LAYOUT: ComponentSpec = ComponentSpec {
    allowed_props: &["type"],
    allowed_values: &[("type", &["grid", "flex", "sidebar-layout"])],
};

/// The closed set of component kinds. Adding a kind means adding a variant
/// here plus its spec table — nothing else in the crate hardcodes kind names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    Card,
    Input,
    Table,
    Layout,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Button,
        ComponentKind::Card,
        ComponentKind::Input,
        ComponentKind::Table,
        ComponentKind::Layout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "Button",
            ComponentKind::Card => "Card",
            ComponentKind::Input => "Input",
            ComponentKind::Table => "Table",
            ComponentKind::Layout => "Layout",
        }
    }

    /// Resolve an untrusted kind name. `None` is a validation error for the
    /// caller to report, never a crash.
    pub fn lookup(name: &str) -> Option<ComponentKind> {
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }

    pub fn spec(&self) -> &'static ComponentSpec {
        match self {
            ComponentKind::Button => &BUTTON,
            ComponentKind::Card => &CARD,
            ComponentKind::Input => &INPUT,
            ComponentKind::Table => &TABLE,
            ComponentKind::Layout => &LAYOUT,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = UiforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::lookup(s).ok_or_else(|| UiforgeError::UnknownKind(s.to_string()))
    }
}

/// All kind names, in registry order.
pub fn known_kinds() -> Vec<&'static str> {
    ComponentKind::ALL.iter().map(|k| k.as_str()).collect()
}

/// The closed set of layout variants accepted at the plan root. These are the
/// Layout component's `type` values.
pub fn layout_variants() -> &'static [&'static str] {
    LAYOUT
        .allowed_values_for("type")
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_values_keys_are_allowed_props() {
        for kind in ComponentKind::ALL {
            let spec = kind.spec();
            for (prop, values) in spec.allowed_values {
                assert!(
                    spec.allows_prop(prop),
                    "{kind}: allowed_values key '{prop}' missing from allowed_props"
                );
                assert!(!values.is_empty(), "{kind}: empty value set for '{prop}'");
            }
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(ComponentKind::lookup("Button"), Some(ComponentKind::Button));
        assert_eq!(ComponentKind::lookup("button"), None);
        assert_eq!(ComponentKind::lookup("Chart"), None);
        assert_eq!(ComponentKind::lookup(""), None);
    }

    #[test]
    fn from_str_reports_unknown_kind() {
        assert!("Table".parse::<ComponentKind>().is_ok());
        assert!(matches!(
            "Widget".parse::<ComponentKind>(),
            Err(UiforgeError::UnknownKind(name)) if name == "Widget"
        ));
    }

    #[test]
    fn layout_variants_match_layout_spec() {
        assert_eq!(layout_variants(), &["grid", "flex", "sidebar-layout"]);
        assert_eq!(known_kinds(), vec!["Button", "Card", "Input", "Table", "Layout"]);
    }

    #[test]
    fn input_type_values_are_closed() {
        let spec = ComponentKind::Input.spec();
        let values = spec.allowed_values_for("type").unwrap();
        assert!(values.contains(&"email"));
        assert!(!values.contains(&"file"));
        assert_eq!(spec.allowed_values_for("label"), None);
    }
}
