//! Shared helpers for bpstudio-axum integration tests.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use bpstudio_axum::bootstrap::{ServerConfig, bootstrap};
use bpstudio_axum::routes::create_router;
use bpstudio_core::SchemaPaths;
use http_body_util::BodyExt;
use tower::ServiceExt;

#[allow(dead_code)]
/// Config rooted at `resource_root`, never bound to a real port.
pub fn test_config(resource_root: &Path) -> ServerConfig {
    let mut config = ServerConfig::new(resource_root);
    config.port = 0;
    config
}

/// Router whose schema files live under `resource_root`.
pub fn test_router(resource_root: &Path) -> Router {
    let config = test_config(resource_root);
    create_router(Arc::new(bootstrap(&config)), &config.cors)
}

/// Write the schema files that are `Some`, leaving the others absent.
#[allow(dead_code)]
pub fn write_schemas(resource_root: &Path, intents: Option<&str>, agent_config: Option<&str>) {
    let paths = SchemaPaths::under(resource_root);
    fs::create_dir_all(paths.intents.parent().unwrap()).unwrap();
    if let Some(body) = intents {
        fs::write(&paths.intents, body).unwrap();
    }
    if let Some(body) = agent_config {
        fs::write(&paths.agent_config, body).unwrap();
    }
}

#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Assert status and decode the body as JSON.
pub async fn json_body(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), expected);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
