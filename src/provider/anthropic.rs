use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::wire::CompletionRequest;

const API_BASE: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    model: String,
    client: Client,
    timeout_secs: u64,
}

impl AnthropicProvider {
    pub fn new(model: String, timeout_secs: u64) -> Self {
        Self { model, client: Client::new(), timeout_secs }
    }
}

#[derive(Deserialize)]
struct MsgResponse {
    content: Vec<Block>,
}

#[derive(Deserialize)]
struct Block {
    #[serde(default)]
    text: String,
    #[serde(default)]
    r#type: String,
}

#[async_trait]
impl super::Provider for AnthropicProvider {
    async fn complete(&self, req: &CompletionRequest, debug: bool) -> Result<String> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| anyhow!("ANTHROPIC_API_KEY env var is not set"))?;

        let url = format!("{}/v1/messages", API_BASE);
        let body = json!({
            "model": self.model,
            "max_tokens": 4096,
            "temperature": req.temperature,
            "system": req.system,
            "messages": [ { "role": "user", "content": req.user } ]
        });

        if debug {
            eprintln!("debug[anthropic]: POST {}", url);
        }

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await
            .context("anthropic request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("anthropic read body failed")?;
        if debug {
            eprintln!("debug[anthropic]: raw status: {}", status);
            eprintln!("debug[anthropic]: raw body:\n{}\n", text);
        }

        if !status.is_success() {
            return Err(anyhow!("Anthropic API error ({}): {}", status, text));
        }

        let parsed: MsgResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("anthropic response parse error: {}", e))?;

        let content = parsed
            .content
            .into_iter()
            .filter(|b| b.r#type == "text" || !b.text.is_empty())
            .map(|b| b.text)
            .collect::<Vec<_>>()
            .join("");

        if content.trim().is_empty() {
            return Err(anyhow!("anthropic: empty content"));
        }

        Ok(content.trim().to_string())
    }
}
