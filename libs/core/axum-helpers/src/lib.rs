//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured JSON error responses
//! - **[`extractors`]**: custom extractors (JSON body with JSON rejection)
//! - **[`http`]**: HTTP middleware (CORS)
//! - **[`server`]**: server setup, Swagger UI, health endpoint, graceful shutdown
//! - **[`validate`]**: declarative request validation rules and middleware
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes, "http://localhost:5173")?;
//!
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validate;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::JsonBody;

// Re-export HTTP middleware
pub use http::create_cors_layer;

// Re-export server types
pub use server::{
    create_app, create_router, health_router, shutdown_signal, HealthResponse,
};

// Re-export validation types
pub use validate::{
    enforce_rules, Check, FieldRule, Location, RuleViolation, ValidationErrorResponse,
};
