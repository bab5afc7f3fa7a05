//! Readiness check with a real database ping.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use database::postgres::{check_health, DatabaseConnection};
use serde_json::json;

pub fn router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready_handler)).with_state(db)
}

async fn ready_handler(State(db): State<DatabaseConnection>) -> Response {
    match check_health(&db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ready", "database": "connected" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Readiness check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "not ready", "database": "disconnected" })),
            )
                .into_response()
        }
    }
}
