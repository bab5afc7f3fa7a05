//! Database library providing the PostgreSQL connector used by the API.
//!
//! Wraps SeaORM connection management behind a small configuration type so
//! the application constructs one pooled handle at startup and passes it
//! down explicitly.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config(config).await?;
//! postgres::run_migrations::<Migrator>(&db, "product_api").await?;
//! ```

pub mod postgres;
