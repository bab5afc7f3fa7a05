use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::create_cors_layer;
use axum::http::HeaderValue;
use axum::Router;
use core_config::server::ServerConfig;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind to the configured
/// address or the server errors while running.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates the application router with common middleware and documentation.
///
/// This function sets up:
/// - Swagger UI at `/docs` (OpenAPI JSON at `/api-docs/openapi.json`)
/// - API routes nested under `/api`
/// - Request tracing and CORS restricted to `frontend_origin`
/// - JSON 404 fallback handler
///
/// Note: liveness endpoints (`/health`, `/ready`) should be merged in by the
/// app using `health_router()` and its own ready handler.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Arguments
/// * `apis` - Router with all routes (state already applied per route)
/// * `frontend_origin` - the single origin allowed by the CORS policy
///
/// # Errors
/// Returns an error if `frontend_origin` is not a valid header value.
pub fn create_router<T>(apis: Router, frontend_origin: &str) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_swagger_ui::SwaggerUi;

    let origin: HeaderValue = frontend_origin.parse().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid frontend origin for CORS: {}", frontend_origin),
        )
    })?;

    info!("CORS configured with allowed origin: {}", frontend_origin);

    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(create_cors_layer(origin));

    Ok(router)
}
