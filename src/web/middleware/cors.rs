//! CORS middleware configuration.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsConfig;

/// Create the cross-origin policy layer from configuration.
///
/// One fixed origin is allowed, with a fixed method and header list; the
/// allow-origin header carries that value on every response, whatever
/// Origin the request sent. An empty or unparseable origin falls back to
/// permissive dev mode.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods = [
        Method::POST,
        Method::GET,
        Method::OPTIONS,
        Method::PUT,
        Method::DELETE,
    ];

    match config.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) if !config.allowed_origin.is_empty() => CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([CONTENT_TYPE, AUTHORIZATION])
            .allow_origin(origin),
        _ => CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any),
    }
}
