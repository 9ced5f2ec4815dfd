//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the server configuration is turned
//! into handler state and a listening socket.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bpstudio_core::paths::{SchemaPaths, resource_root};
use tokio::net::TcpListener;
use tracing::info;
use utoipa::OpenApi;

use crate::docs::ApiDoc;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host/interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Directory the shared schema files are looked up under.
    pub resource_root: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Default host, port and CORS, reading schemas under `resource_root`.
    pub fn new(resource_root: impl Into<PathBuf>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            resource_root: resource_root.into(),
            cors: CorsConfig::default(),
        }
    }

    /// Create config with defaults and the resolved resource root.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(resource_root()?))
    }

    /// Set CORS to allow specific origins. An empty list keeps allow-all.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }

    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds only read-only data; each request does its own I/O.
pub struct AxumContext {
    /// Where `/schemas` reads its documents from.
    pub schema_paths: SchemaPaths,
    /// This service's own interface description.
    pub openapi: utoipa::openapi::OpenApi,
}

/// Build the handler context from a server configuration.
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    let schema_paths = SchemaPaths::under(&config.resource_root);

    tracing::info!(
        target: "bpstudio.paths",
        resource_root = %config.resource_root.display(),
        intents_schema = %schema_paths.intents.display(),
        agent_config_schema = %schema_paths.agent_config.display(),
        "Axum bootstrap resolved paths"
    );

    AxumContext {
        schema_paths,
        openapi: ApiDoc::openapi(),
    }
}

/// Start the web server and serve until Ctrl-C.
///
/// Bind failures are returned to the caller.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = Arc::new(bootstrap(&config));
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local: SocketAddr = listener.local_addr()?;

    info!("bpstudio API listening on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("bpstudio API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
