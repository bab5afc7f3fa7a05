use axum::http::{HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer that grants access to a single configured origin.
///
/// Requests from any other origin receive no CORS grant and are rejected by
/// the browser.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - The one allowed origin
/// - Methods GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers Content-Type and Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}
