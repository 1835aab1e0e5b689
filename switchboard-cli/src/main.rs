mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use switchboard::server::{AppState, bind, serve};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

const DEFAULT_LOG_FILTER: &str = "switchboard=info,switchboard_server=info";

fn init_tracing(json_logs: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.json_logs);

    info!("switchboard v{} starting", env!("CARGO_PKG_VERSION"));

    let addr = config.socket_addr();
    let server_config = config.server_config();
    if server_config.ice_servers.is_empty() {
        info!("No ICE servers configured, clients will rely on their own");
    }

    let state = Arc::new(AppState::new(server_config));
    let listener = bind(addr)
        .await
        .with_context(|| format!("Failed to start listener on {}", addr))?;

    info!("Health check available at http://{}/health", addr);

    serve(listener, state)
        .await
        .context("Signaling server stopped")?;

    Ok(())
}
