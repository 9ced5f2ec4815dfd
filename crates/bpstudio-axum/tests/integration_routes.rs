//! Integration tests for the Axum web server.
//!
//! These tests verify that routes are correctly wired to handlers.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tempfile::tempdir;

use common::{get, json_body, test_router};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let temp = tempdir().unwrap();
    let response = get(test_router(temp.path()), "/healthz").await;

    let json = json_body(response, StatusCode::OK).await;
    assert_eq!(json, json!({"ok": true}));
}

#[tokio::test]
async fn health_endpoint_is_idempotent() {
    let temp = tempdir().unwrap();
    let app = test_router(temp.path());

    for _ in 0..25 {
        let json = json_body(get(app.clone(), "/healthz").await, StatusCode::OK).await;
        assert_eq!(json, json!({"ok": true}));
    }

    // Nothing was written to the resource root
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn health_endpoint_rejects_post() {
    let temp = tempdir().unwrap();
    let response = common::post_json(test_router(temp.path()), "/healthz", "{}").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_connection_rejects_get() {
    let temp = tempdir().unwrap();
    let response = get(test_router(temp.path()), "/mcp/test-connection").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let temp = tempdir().unwrap();
    let response = get(test_router(temp.path()), "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
