//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
///
/// The API routes are nested under the configured prefix; the banner route
/// stays at the server root.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Ops
        .route("/health", get(handlers::health_check))
        // Requirement intake
        .route("/briefs", post(handlers::capture_brief))
        // Project CRUD
        .route("/projects", get(handlers::list_projects))
        .route("/projects", post(handlers::create_project))
        .route("/projects/{project_id}", get(handlers::get_project))
        // Pipeline stage reruns
        .route("/projects/{project_id}/layout", post(handlers::generate_layout))
        .route("/projects/{project_id}/structure", post(handlers::generate_structure))
        .route("/projects/{project_id}/estimate", post(handlers::generate_estimate))
        .route("/projects/{project_id}/drawings", post(handlers::generate_drawings))
        .route("/projects/{project_id}/compliance", post(handlers::run_compliance))
        .route("/projects/{project_id}/exports", post(handlers::generate_exports))
        .route("/projects/{project_id}/risks", post(handlers::refresh_risks));

    let prefix = state.settings.api_prefix.clone();

    // Combine all routes
    Router::new()
        .route("/", get(handlers::root))
        .nest(&prefix, api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
