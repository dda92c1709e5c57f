#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::to_bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use plan_my_trip::config::UpstreamConfig;
use plan_my_trip::server::{AppState, router};
use plan_my_trip::upstream::HttpUpstream;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// A fake chat-completions provider listening on a random local port.
#[derive(Clone)]
pub struct StubUpstream {
    pub base_url: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

impl StubUpstream {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body: body.into(),
            calls: calls.clone(),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v1"),
            calls,
            requests,
        }
    }

    /// Reply with an OpenAI-style completion carrying `text`.
    pub async fn replying(text: &str) -> Self {
        let body = serde_json::json!({
            "id": "chatcmpl-test",
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": text } }]
        });
        Self::start(StatusCode::OK, body.to_string()).await
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(HeaderMap, Value)> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn config(&self, api_key: Option<&str>) -> UpstreamConfig {
        UpstreamConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.map(str::to_string),
            ..Default::default()
        }
    }

    /// The proxy router wired to this stub.
    pub fn proxy(&self, api_key: Option<&str>) -> Router {
        let state = AppState::new(HttpUpstream::new(self.config(api_key)));
        router(state, Path::new("tests/no-such-site"))
    }
}

async fn completions(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.calls.fetch_add(1, Ordering::SeqCst);
    let json = serde_json::from_str(&body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push((headers, json));
    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
}

/// Start `app` on a random local port and return its root URL.
pub async fn spawn_app(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Send a POST request and return `(status, body_json)`.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request build should succeed"),
        )
        .await
        .expect("app should handle request");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
