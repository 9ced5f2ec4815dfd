//! `bpstudio-voice` entry point.

use tracing_subscriber::EnvFilter;

use bpstudio_voice::{WorkerConfig, load_env_file, run};

async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(target: "bpstudio.voice", "Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Before logging init so RUST_LOG from .env applies
    let env_file = load_env_file();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match env_file {
        Ok(Some(path)) => {
            tracing::debug!(target: "bpstudio.voice", path = %path.display(), "Loaded env file");
        }
        Ok(None) => {}
        Err(e) => tracing::warn!(target: "bpstudio.voice", "Ignoring unreadable env file: {}", e),
    }

    let config = WorkerConfig::from_env();
    run(&config, interrupted()).await;
}
