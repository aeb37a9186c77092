use crate::cli::ProviderKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub schema_version: String,
    pub root: String,
    pub out_dir: String,
    pub artifacts_dir: String,
    pub provider: ProviderKind,
    pub model: String,
    pub timeout_secs: u64,
    pub auto_approve: bool,
    /// Hard ceiling on the raw completion size we are willing to parse.
    pub max_response_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: "2026-07-01".into(),
            root: ".".into(),
            out_dir: "generated".into(),
            artifacts_dir: ".uiforge".into(),
            provider: ProviderKind::Google,
            model: ProviderKind::Google.default_model().into(),
            timeout_secs: 120,
            auto_approve: false,
            max_response_bytes: 262_144,
        }
    }
}
