//! HTTP server for the split engine.
//!
//! Reads configuration from the directory named by `SPLIT_ENGINE_CONFIG`
//! (default `./config/default`) and serves a single split session.

use std::env;
use std::error::Error;

use split_engine::api::{AppState, create_router};
use split_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const CONFIG_DIR_ENV: &str = "SPLIT_ENGINE_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let bind_address = config.server().bind_address.clone();

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(address = %bind_address, "Split engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
