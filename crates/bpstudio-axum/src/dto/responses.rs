//! Response bodies.

use bpstudio_core::{SchemaBundle, ToolDescriptor, mock_tools};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of `GET /healthz`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
}

impl HealthResponse {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}

/// Body of a successful `POST /mcp/test-connection`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConnectionTestResponse {
    pub ok: bool,
    pub tools: Vec<ToolDescriptor>,
}

impl ConnectionTestResponse {
    /// The fixed success envelope.
    pub fn mock() -> Self {
        Self {
            ok: true,
            tools: mock_tools(),
        }
    }
}

/// Body of `GET /schemas`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SchemasResponse {
    /// OpenAPI document describing this service.
    #[schema(value_type = Object)]
    pub openapi: utoipa::openapi::OpenApi,
    pub schemas: SchemaBundle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_serialization() {
        assert_eq!(
            serde_json::to_value(HealthResponse::ok()).unwrap(),
            json!({"ok": true})
        );
    }

    #[test]
    fn test_mock_envelope_serialization() {
        let json = serde_json::to_value(ConnectionTestResponse::mock()).unwrap();
        assert_eq!(
            json,
            json!({
                "ok": true,
                "tools": [
                    {"name": "query_supabase", "description": "Query Supabase tables"},
                    {"name": "summarize", "description": "Summarize text content"}
                ]
            })
        );
    }
}
