/// Common test utilities and fixtures
use anyhow::Result;
use axum::{body::Body, http::Request, Router};
use roster_core::storage::UserRepository;
use roster_server::{api, state::AppState};
use roster_storage::UserStore;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Create a test store backed by an in-memory database
pub async fn create_test_store() -> Result<Arc<UserStore>> {
    let store = UserStore::open("sqlite::memory:").await?;
    Ok(Arc::new(store))
}

/// Build the full application router over a fresh store
pub async fn create_test_app() -> (Router, Arc<UserStore>) {
    let store = create_test_store().await.unwrap();
    let state = AppState::new(Arc::clone(&store) as Arc<dyn UserRepository>);
    (api::router(state), store)
}

/// Send one request and return the status with the parsed body
///
/// An empty body comes back as `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (axum::http::StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Test user bodies
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn jane() -> Value {
        json!({
            "user": "Jane",
            "email": "jane@x.com",
            "mobile": 5551234,
            "age": 30,
            "interest": ["reading", "chess"]
        })
    }

    pub fn user(name: &str, email: &str) -> Value {
        json!({
            "user": name,
            "email": email,
            "mobile": 5550000,
            "age": 40,
            "interest": []
        })
    }
}
