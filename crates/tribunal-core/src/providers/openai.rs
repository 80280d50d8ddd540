//! Chat-completions client for OpenAI-style backends.
//!
//! Covers both hosted models and a locally served model: the local runtime
//! exposes the same protocol at its own base URL, so one implementation
//! serves all registry entries. Swapping backends never changes prompt
//! content.

use super::JudgeClient;
use crate::model::{Conversation, JudgeResponse};
use async_trait::async_trait;
use serde_json::json;

pub const HOSTED_BASE_URL: &str = "https://api.openai.com/v1";
pub const LOCAL_BASE_URL: &str = "http://localhost:11434/v1";

#[derive(Debug)]
pub struct OpenAiChatClient {
    base_url: String,
    model: String,
    api_key: String,
    provider: &'static str,
    client: reqwest::Client,
}

impl OpenAiChatClient {
    /// Client for a hosted model.
    pub fn hosted(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: HOSTED_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            provider: "openai",
            client: reqwest::Client::new(),
        }
    }

    /// Client for a locally served OpenAI-compatible model. The local
    /// runtime ignores the key but the header must still be present.
    pub fn local(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: "nokeyneeded".to_string(),
            provider: "local",
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl JudgeClient for OpenAiChatClient {
    async fn complete(&self, conversation: &Conversation) -> anyhow::Result<JudgeResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let messages: Vec<serde_json::Value> = conversation
            .messages()
            .iter()
            .map(|m| json!({ "role": m.role, "content": m.content }))
            .collect();

        // Deterministic sampling: temperature pinned to zero, one choice.
        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0.0,
            "n": 1,
        });

        tracing::debug!(
            provider = self.provider,
            model = %self.model,
            turns = conversation.len(),
            "sending completion request"
        );

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            anyhow::bail!(
                "chat API error from {} (status {}): {}",
                self.provider,
                status,
                error_text
            );
        }

        let json: serde_json::Value = resp.json().await?;
        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("chat API response missing message content"))?
            .to_string();

        Ok(JudgeResponse {
            text,
            provider: self.provider.to_string(),
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
