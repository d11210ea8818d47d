//! Shared helpers for router-level tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use homebook_server::{
    api,
    config::StorageConfig,
    repository::{ExpenseStore, LibraryStore},
    services::{ExpenseServices, LibraryServices},
    ExpenseState, LibraryState,
};

pub fn storage(dir: &TempDir) -> StorageConfig {
    StorageConfig {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    }
}

pub async fn expense_app(dir: &TempDir) -> Router {
    let store = ExpenseStore::open(&storage(dir)).await.unwrap();
    api::expense_router(ExpenseState {
        services: Arc::new(ExpenseServices::new(store)),
    })
}

pub async fn library_app(dir: &TempDir) -> Router {
    let store = LibraryStore::open(&storage(dir)).await.unwrap();
    api::library_router(LibraryState {
        services: Arc::new(LibraryServices::new(store)),
    })
}

/// Percent-encode a path segment or query value
pub fn encode(raw: &str) -> String {
    raw.bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b"-_.~".contains(&b) {
                (b as char).to_string()
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect()
}

pub async fn raw(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Send a request with an optional JSON body, returning status and parsed body
/// (`Value::Null` for empty bodies)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = raw(app, request).await;
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}
