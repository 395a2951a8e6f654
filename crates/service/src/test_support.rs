#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database for a single test.
pub async fn test_db() -> DatabaseConnection {
    let mut cfg = configs::DatabaseConfig::default();
    cfg.url = "sqlite::memory:".to_string();
    let db = models::db::connect_with_config(&cfg)
        .await
        .expect("connect sqlite memory");
    migration::Migrator::up(&db, None).await.expect("migrate up");
    db
}
