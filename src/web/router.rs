//! Router configuration for the zencloud web API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{delete_file, download_file, list_files, preflight, upload_file, AppState};
use super::middleware::create_cors_layer;
use crate::config::CorsConfig;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors: &CorsConfig) -> Router {
    let body_limit = app_state.max_upload_size as usize;

    Router::new()
        .route("/upload", post(upload_file))
        .route("/download", get(download_file))
        .route("/files", get(list_files))
        .route("/delete", delete(delete_file).options(preflight))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
