//! Products API - REST server

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{self, DatabaseConnection};
use tracing::{error, info};

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // Load a local .env before reading the process environment
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_database(&config).await;

    // Build router with API routes; create_router adds docs/middleware
    let api_routes = api::routes(db.clone());
    let router = create_router::<openapi::ApiDoc>(api_routes, &config.frontend_url)?;

    // Merge liveness/readiness endpoints into the app
    let app = router
        .merge(health_router(config.app))
        .merge(api::ready_router(db));

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_app(app, &config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}

/// Connect to PostgreSQL and bring the schema up to date.
///
/// A startup connection failure is logged and the process keeps serving
/// with a disconnected handle; requests that touch the database then fail
/// with an internal server error.
async fn connect_database(config: &Config) -> DatabaseConnection {
    match postgres::connect_from_config(config.database.clone()).await {
        Ok(db) => {
            if let Err(e) = postgres::run_migrations::<migration::Migrator>(&db, "product_api").await
            {
                error!("Failed to run database migrations: {}", e);
            }
            db
        }
        Err(e) => {
            error!("There was an error connecting to the database: {}", e);
            postgres::disconnected()
        }
    }
}
