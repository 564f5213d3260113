//! HTTP server for the PAYE engine.
//!
//! `PAYE_CONFIG_DIR` selects a regime directory (the built-in statutory regime
//! is used when unset) and `PAYE_BIND_ADDR` the listen address.

use std::env;

use paye_engine::api::{AppState, create_router};
use paye_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match env::var("PAYE_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(dir)?,
        Err(_) => ConfigLoader::statutory(),
    };
    let state = AppState::new(config);
    let regime = state.regime_code().to_string();

    let addr = env::var("PAYE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, regime = %regime, "PAYE engine listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
