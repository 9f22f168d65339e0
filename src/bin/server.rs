//! CivilForge HTTP Server Binary
//!
//! This is the main entry point for the CivilForge REST API server.
//! It loads settings, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin civilforge-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CIVILFORGE_APP_NAME`: Override the configured application name
//! - `CIVILFORGE_ENVIRONMENT`: Override the configured environment name
//! - `CIVILFORGE_API_PREFIX`: Override the API route prefix (default: /api)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use civilforge::config::Settings;
use civilforge::http::{create_router, AppState};
use civilforge::store::ProjectStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting CivilForge HTTP Server");

    // Resolve settings from file and environment overrides
    let settings = Settings::load()?;
    info!(
        "Settings loaded: app={} environment={} prefix={}",
        settings.app_name, settings.environment, settings.api_prefix
    );
    let api_prefix = settings.api_prefix.clone();

    // Create application state with an empty in-memory store
    let state = AppState::new(ProjectStore::new(), settings);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health endpoint: http://{}{}/health", addr, api_prefix);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
