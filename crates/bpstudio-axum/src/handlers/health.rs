//! Health check handler.

use axum::Json;

use crate::dto::HealthResponse;

/// Liveness check. Always succeeds and touches nothing.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
