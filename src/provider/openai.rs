use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::wire::CompletionRequest;

pub struct OpenAiProvider {
    model: String,
    client: Client,
    timeout_secs: u64,
}

impl OpenAiProvider {
    pub fn new(model: String, timeout_secs: u64) -> Self {
        Self { model, client: Client::new(), timeout_secs }
    }
}

#[async_trait]
impl super::Provider for OpenAiProvider {
    async fn complete(&self, req: &CompletionRequest, debug: bool) -> Result<String> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("OPENAI_API_KEY env var is not set"))?;

        let body = json!({
            "model": self.model,
            "temperature": req.temperature,
            "messages": [
                { "role": "system", "content": req.system },
                { "role": "user", "content": req.user }
            ]
        });

        if debug {
            eprintln!(
                "debug[openai]: HTTP POST /v1/chat/completions body:\n{}",
                serde_json::to_string_pretty(&body)?
            );
        }

        let resp = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if debug {
            eprintln!("debug[openai]: raw status: {}", status);
            eprintln!("debug[openai]: raw response:\n{}", &text);
        }

        if !status.is_success() {
            return Err(anyhow!("OpenAI API error ({}): {}", status, text));
        }

        #[derive(Deserialize)]
        struct ChatMessage {
            content: String,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChatMessage,
        }
        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<Choice>,
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse OpenAI response: {e}\nRaw: {text}"))?;

        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(anyhow!("OpenAI response missing content"));
        }

        Ok(content)
    }
}
