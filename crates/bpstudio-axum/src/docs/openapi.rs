//! OpenAPI specification for the bpstudio backend.

use bpstudio_core::{ConnectionRequest, SchemaBundle, ToolDescriptor};
use utoipa::OpenApi;

use crate::dto::{ConnectionTestResponse, HealthResponse, SchemasResponse};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bpstudio-backend",
        version = "0.1.0",
        description = "Backend API for bpstudio: health, MCP connection testing and shared schemas"
    ),
    paths(
        crate::handlers::health::healthz,
        crate::handlers::mcp::test_connection,
        crate::handlers::schemas::schemas,
    ),
    components(schemas(
        HealthResponse,
        ConnectionRequest,
        ToolDescriptor,
        ConnectionTestResponse,
        SchemaBundle,
        SchemasResponse,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "mcp", description = "MCP server connection testing"),
        (name = "schemas", description = "Shared intent and agent-config schemas")
    )
)]
pub struct ApiDoc;
