#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use memoa::config::MemoaConfig;
use memoa::server::{router, AppState};
use memoa::storage::{MemoryStorage, StoragePort};
use tower::ServiceExt;

/// App state over a fresh in-memory storage port, with the assistant's
/// reply delay zeroed so tests don't sleep.
pub fn test_state() -> AppState {
    let mut config = MemoaConfig::default();
    config.assistant.reply_delay_ms = 0;
    AppState {
        storage: Arc::new(MemoryStorage::new()),
        config: Arc::new(config),
    }
}

/// Fresh in-memory storage port for store-level tests.
pub fn test_storage() -> Arc<dyn StoragePort> {
    Arc::new(MemoryStorage::new())
}

/// Send one JSON request through the router and return the response.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    router(state.clone())
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user through the API and return their id.
pub async fn register_user(state: &AppState, name: &str, email: &str, password: &str) -> String {
    let response = send(
        state,
        "POST",
        "/api/register",
        Some(serde_json::json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["user"]["id"].as_str().unwrap().to_string()
}
