use sea_orm::{DatabaseConnection, DbErr};

/// Ping the database to verify the connection is usable.
///
/// Used by the `/ready` endpoint.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}
