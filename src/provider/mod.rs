use anyhow::Result;
use async_trait::async_trait;

use crate::cli::ProviderKind;
use crate::wire::CompletionRequest;

pub mod anthropic;
pub mod google;
pub mod openai;

/// The external completion seam. Adapters return the model's raw text —
/// possibly prose-wrapped, possibly garbage. Nothing downstream trusts it
/// until it has been through extraction and validation.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, req: &CompletionRequest, debug: bool) -> Result<String>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(kind: ProviderKind, model: String, timeout_secs: u64) -> Result<DynProvider> {
    match kind {
        ProviderKind::Google => Ok(Box::new(google::GoogleProvider::new(model, timeout_secs))),
        ProviderKind::Openai => Ok(Box::new(openai::OpenAiProvider::new(model, timeout_secs))),
        ProviderKind::Anthropic => {
            Ok(Box::new(anthropic::AnthropicProvider::new(model, timeout_secs)))
        }
    }
}
