//! Products API routes

use axum::Router;
use database::postgres::DatabaseConnection;
use domain_products::{handlers, PgProductRepository, ProductService};

/// Create the products router backed by PostgreSQL
pub fn router(db: DatabaseConnection) -> Router {
    let repository = PgProductRepository::new(db);
    let service = ProductService::new(repository);
    handlers::router(service)
}
