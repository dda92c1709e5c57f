use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Everything `/api/chat` can answer with besides a completion.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Missing prompt")]
    MissingPrompt,

    #[error("{0}")]
    BadRequest(String),

    #[error("Upstream error")]
    Upstream { status: u16, detail: String },

    #[error("{0}")]
    Internal(String),
}

impl From<UpstreamError> for ProxyError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, body } => ProxyError::Upstream {
                status,
                detail: body,
            },
            UpstreamError::Request(e) => ProxyError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (code, body) = match &self {
            ProxyError::MissingPrompt | ProxyError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            ProxyError::Upstream { status, detail } => {
                tracing::error!(upstream_status = status, body = %detail, "Upstream error");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": self.to_string(), "detail": detail }),
                )
            }
            ProxyError::Internal(message) => {
                tracing::error!(error = %message, "Server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": self.to_string() }),
                )
            }
        };
        (code, Json(body)).into_response()
    }
}
