use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::UpstreamConfig;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant providing travel plans.";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 500;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// A successful upstream round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    /// Upstream payload, untouched.
    pub raw: Value,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream returned status {status}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Completion, UpstreamError>;
}

/// OpenAI-compatible `/chat/completions` client.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    endpoint: String,
    config: UpstreamConfig,
}

impl HttpUpstream {
    pub fn new(config: UpstreamConfig) -> Self {
        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        Self {
            client: reqwest::Client::new(),
            endpoint,
            config,
        }
    }
}

#[async_trait]
impl ChatCompletion for HttpUpstream {
    async fn complete(&self, prompt: &str) -> Result<Completion, UpstreamError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw: Value = response.json().await?;
        Ok(Completion {
            text: extract_text(&raw),
            raw,
        })
    }
}

/// `choices[0].message.content`, then `choices[0].text`, then the whole payload.
pub fn extract_text(raw: &Value) -> String {
    let choice = &raw["choices"][0];
    [&choice["message"]["content"], &choice["text"]]
        .into_iter()
        .find(|v| !v.is_null())
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| raw.to_string())
}
