//! Configuration for the Products API

use core_config::{app_info, env_required, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
///
/// Composes shared config components and is read once at startup; every
/// collaborator receives the pieces it needs instead of reading the
/// environment itself.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    /// The single origin allowed by the CORS policy
    pub frontend_url: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=4000
        let frontend_url = env_required("FRONTEND_URL")?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            frontend_url,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/products")),
                ("FRONTEND_URL", Some("http://localhost:5173")),
                ("PORT", Some("4100")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.frontend_url, "http://localhost:5173");
                assert_eq!(config.server.port, 4100);
                assert_eq!(config.app.name, "product_api");
            },
        );
    }

    #[test]
    fn test_config_requires_frontend_url() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/products")),
                ("FRONTEND_URL", None),
            ],
            || {
                let result = Config::from_env();
                assert!(result.is_err());
            },
        );
    }

    #[test]
    fn test_config_requires_database_url() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None::<&str>),
                ("FRONTEND_URL", Some("http://localhost:5173")),
            ],
            || {
                let result = Config::from_env();
                assert!(result.is_err());
            },
        );
    }
}
