use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ProxyError;
use crate::upstream::{ChatCompletion, HttpUpstream};

pub const CHAT_PATH: &str = "/api/chat";
pub const HEALTH_PATH: &str = "/health";

const BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    upstream: Arc<dyn ChatCompletion>,
}

impl AppState {
    pub fn new(upstream: impl ChatCompletion + 'static) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
    pub raw: Value,
}

/// API routes, with the static site behind them.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route(CHAT_PATH, post(chat))
        .route(HEALTH_PATH, get(health))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: Config) -> std::io::Result<()> {
    if config.upstream.api_key.is_none() {
        tracing::warn!("A4F_API_KEY not set, upstream calls will be rejected");
    }

    let state = AppState::new(HttpUpstream::new(config.upstream.clone()));
    let app = router(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "Proxy listening on port {} (static files from {})",
        config.port,
        config.static_dir.display()
    );

    axum::serve(listener, app).await
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ProxyError> {
    let body = match payload {
        Ok(Json(body)) => body,
        // Non-JSON bodies look like an empty object.
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
        Err(rejection) => return Err(ProxyError::BadRequest(rejection.body_text())),
    };

    let prompt = match body.get("prompt") {
        Some(Value::String(prompt)) if !prompt.is_empty() => prompt,
        _ => return Err(ProxyError::MissingPrompt),
    };

    let completion = state
        .upstream
        .complete(prompt)
        .await
        .map_err(ProxyError::from)?;

    Ok(Json(ChatResponse {
        text: completion.text,
        raw: completion.raw,
    }))
}
