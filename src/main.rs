//! Enhancement server for the unified interface.
//!
//! Serves the enhancement assets (including `enhancements.html`) on a fixed
//! port, hosts the Notebook Browser panel under `/browser`, and serves host
//! pages with the fragment injected under `/enhanced/`.

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use interface_enhancements::{app, AppState, Config};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let port = config.port;
    let assets_dir = config.assets_dir.clone();
    let api_url = config.notebook_api_url.clone();

    let state = Arc::new(AppState::new(config).expect("invalid notebook service URL"));
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to port {}: {}", port, e));

    tracing::info!(%port, "Enhancement server running on port {}", port);
    tracing::info!(assets = %assets_dir.display(), notebooks = %api_url, "serving enhancements");

    axum::serve(listener, router).await.expect("Server error");
}
