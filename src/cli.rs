use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Openai,
    Anthropic,
}

impl ProviderKind {
    /// Model used when the user does not pass `--model`.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Google => "gemini-2.5-flash",
            ProviderKind::Openai => "gpt-4o-mini",
            ProviderKind::Anthropic => "claude-3-5-sonnet-20240620",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Google => "google",
            ProviderKind::Openai => "openai",
            ProviderKind::Anthropic => "anthropic",
        };
        f.write_str(name)
    }
}

#[derive(Parser, Debug)]
#[command(name = "uiforge", version)]
pub struct Args {
    /// Natural-language UI request, e.g. "a signup form with email and password"
    #[arg(long)]
    pub task: Option<String>,

    #[arg(long)]
    pub root: Option<String>,

    /// Directory the generated source file is written to
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(long)]
    pub model: Option<String>,

    /// Path to a previously generated plan JSON, for iterative edits
    #[arg(long)]
    pub previous_plan: Option<String>,

    /// Ask the model to explain its component choices after generation
    #[arg(long, default_value_t = false)]
    pub explain: bool,

    /// Validate and generate but do not write the output file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    pub auto_approve: bool,

    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
