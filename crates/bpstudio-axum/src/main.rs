//! `bpstudio-api` entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bpstudio_axum::{Cli, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Cli::parse().into_server_config()?;
    start_server(config).await
}
