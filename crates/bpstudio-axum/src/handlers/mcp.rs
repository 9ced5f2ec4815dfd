//! MCP handlers - connection testing.
//!
//! The connection test is mocked: the body is validated for shape, then a
//! fixed tool list is returned. No network call is made.

use axum::Json;
use bpstudio_core::ConnectionRequest;

use crate::dto::ConnectionTestResponse;
use crate::extract::JsonBody;

/// Test a connection to an MCP server.
#[utoipa::path(
    post,
    path = "/mcp/test-connection",
    tag = "mcp",
    request_body = ConnectionRequest,
    responses(
        (status = 200, description = "Tools reported by the server", body = ConnectionTestResponse),
        (status = 413, description = "Body exceeds the size limit"),
        (status = 422, description = "Body is not JSON, or serverUrl/token is missing or not a string")
    )
)]
pub async fn test_connection(
    JsonBody(req): JsonBody<ConnectionRequest>,
) -> Json<ConnectionTestResponse> {
    tracing::debug!(server_url = %req.server_url, "Mock MCP connection test");
    Json(ConnectionTestResponse::mock())
}
