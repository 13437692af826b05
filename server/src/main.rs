//! Pokedex server: reads settings from env / `.env`, connects to MongoDB and serves the catalog.
//!
//! Run from repo root: `cargo run -p pokedex-server`
//! Requires `MONGODB`; `PORT` (default 3000) and `DEFAULT_LIMIT` (default 20) are optional.

use pokedex_api::{app, AppConfig, AppState, MongoStore, PokemonService, API_PREFIX};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokedex_api=info,pokedex_server=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(port = config.port, default_limit = config.default_limit, "config loaded");

    let store = MongoStore::connect(&config.mongodb).await?;
    let state = AppState {
        pokemon: PokemonService::new(Arc::new(store), &config),
    };

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on http://{}{}", listener.local_addr()?, API_PREFIX);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
