//! # uiforge
//!
//! Turns a natural-language UI request into a validated, whitelisted plan and
//! deterministically renders that plan into React source text.
//!
//! The core is pure and synchronous: a completion service hands back raw text,
//! `extract::extract_plan` digs the JSON out of it, `plan::validate` walks the
//! untrusted candidate against the component registry and reports every
//! violation, and `codegen::generate` serializes an accepted plan — through
//! the prop sanitizer, again — into renderable source. Providers, prompt
//! assembly, and artifact logging live at the edges; nothing in the core does
//! I/O.
//!
//! ## Example
//! ```
//! use uiforge::{codegen, extract, plan};
//!
//! let raw = r#"Sure! {"layout":"grid","components":[{"type":"Button","props":{"label":"Go"}}]}"#;
//! let candidate = extract::extract_plan(raw).expect("no JSON in completion");
//! let verdict = plan::validate(&candidate);
//! assert!(verdict.is_valid);
//! let ui_plan: uiforge::UiPlan = serde_json::from_value(candidate).unwrap();
//! let code = codegen::generate(&ui_plan);
//! assert!(code.contains("<Button label={\"Go\"} />"));
//! ```

pub mod cli;
pub mod codegen;
pub mod config;
pub mod context;
pub mod errors;
pub mod extract;
pub mod log;
pub mod plan;
pub mod prompt;
pub mod provider;
pub mod registry;
pub mod safety;
pub mod ux;
pub mod wire;

pub use errors::UiforgeError;
pub use registry::{ComponentKind, ComponentSpec};
pub use wire::{PlanNode, UiPlan, ValidationResult};
