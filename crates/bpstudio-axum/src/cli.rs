//! Command-line interface for the `bpstudio-api` binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::bootstrap::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};

/// Serve the bpstudio backend API.
#[derive(Debug, Parser)]
#[command(name = "bpstudio-api")]
#[command(about = "Serve the bpstudio backend API")]
#[command(version)]
pub struct Cli {
    /// Host/interface to bind
    #[arg(long, env = "BPSTUDIO_API_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "BPSTUDIO_API_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Allowed CORS origin (repeatable). Allows all origins when omitted.
    #[arg(
        long = "allowed-origin",
        env = "BPSTUDIO_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,

    /// Directory containing `packages/shared/schemas`.
    /// Falls back to BPSTUDIO_RESOURCE_DIR, then the build checkout.
    #[arg(long = "resource-dir")]
    pub resource_dir: Option<PathBuf>,
}

impl Cli {
    /// Turn parsed arguments into a server configuration.
    pub fn into_server_config(self) -> Result<ServerConfig> {
        let base = match self.resource_dir {
            Some(dir) => ServerConfig::new(dir),
            None => ServerConfig::with_defaults()?,
        };

        Ok(ServerConfig {
            host: self.host,
            port: self.port,
            ..base
        }
        .with_allowed_origins(self.allowed_origins))
    }
}
