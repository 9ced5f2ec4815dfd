//! Schema handler - serves the interface description and shared schemas.

use axum::Json;
use axum::extract::State;
use bpstudio_core::SchemaBundle;

use crate::dto::SchemasResponse;
use crate::state::AppState;

/// Return the OpenAPI document plus the intents and agent-config schemas.
///
/// Both schema files are read on every call. Missing or malformed files are
/// served as `{}`; this handler never fails.
#[utoipa::path(
    get,
    path = "/schemas",
    tag = "schemas",
    responses((status = 200, description = "Schema bundle", body = SchemasResponse))
)]
pub async fn schemas(State(state): State<AppState>) -> Json<SchemasResponse> {
    let paths = state.schema_paths.clone();
    // Blocking file reads stay off the async workers.
    let schemas = tokio::task::spawn_blocking(move || SchemaBundle::load(&paths))
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(target: "bpstudio.schemas", "Schema load task failed: {}", e);
            SchemaBundle::empty()
        });

    Json(SchemasResponse {
        openapi: state.openapi.clone(),
        schemas,
    })
}
