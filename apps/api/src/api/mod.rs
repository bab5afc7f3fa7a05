//! API routes module

pub mod products;
pub mod ready;

use axum::Router;
use database::postgres::DatabaseConnection;

/// Creates the API routes without the `/api` prefix.
///
/// The `/api` prefix is added by the `create_router` helper. Sub-routers
/// have their state applied already, so this composes stateless routers.
pub fn routes(db: DatabaseConnection) -> Router {
    Router::new().nest("/products", products::router(db))
}

/// Creates a router with the `/ready` endpoint that pings the database.
pub fn ready_router(db: DatabaseConnection) -> Router {
    ready::router(db)
}
