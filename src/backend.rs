//! Client side of `/api/chat`, as used by the trip planner.

use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

use crate::server::CHAT_PATH;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend error {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a prompt, get the model's text back.
    async fn chat(&self, prompt: &str) -> Result<String, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: reqwest::Client,
    url: String,
}

impl ProxyClient {
    pub fn new(proxy_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{}", proxy_url.trim_end_matches('/'), CHAT_PATH),
        }
    }
}

#[async_trait]
impl ChatBackend for ProxyClient {
    async fn chat(&self, prompt: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "prompt": prompt }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = response.json().await?;
        Ok(reply_text(json))
    }
}

fn reply_text(json: Value) -> String {
    match json.get("text") {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        _ => json.to_string(),
    }
}
