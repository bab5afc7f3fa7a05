//! Fallback handlers producing JSON error bodies.

use super::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Handler for requests that match no route.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "The requested resource was not found".to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
