use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::wire::CompletionRequest;

/// Gemini has no separate system role on this endpoint; the system prompt is
/// prepended to the user turn.
pub struct GoogleProvider {
    model: String,
    client: Client,
    timeout_secs: u64,
}

impl GoogleProvider {
    pub fn new(model: String, timeout_secs: u64) -> Self {
        Self { model, client: Client::new(), timeout_secs }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl super::Provider for GoogleProvider {
    async fn complete(&self, req: &CompletionRequest, debug: bool) -> Result<String> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| anyhow!("GOOGLE_API_KEY env var is not set"))?;

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, api_key
        );

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [ { "text": format!("{}\n\n{}", req.system, req.user) } ]
            }],
            "generationConfig": { "temperature": req.temperature }
        });

        if debug {
            eprintln!("debug[google]: POST generateContent model={}", self.model);
        }

        let resp = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if debug {
            eprintln!("debug[google]: raw status: {}", status);
            eprintln!("debug[google]: raw response:\n{}", &text);
        }

        if !status.is_success() {
            return Err(anyhow!("Google API error ({}): {}", status, text));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse Google response: {e}\nRaw: {text}"))?;

        let content = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(anyhow!("Google response missing content"));
        }

        Ok(content)
    }
}
