use std::time::Duration;

use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
});

pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let mut cfg = configs::DatabaseConfig::default();
    cfg.url = DATABASE_URL.clone();
    connect_with_config(&cfg).await
}

pub async fn connect_with_config(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    // An in-memory SQLite database exists per connection; pooling more than
    // one connection would hand out empty databases.
    if cfg.url.contains(":memory:") {
        opt.max_connections(1).min_connections(1);
    }
    let db = Database::connect(opt).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};

    #[tokio::test]
    async fn connect_migrate_and_insert() {
        let mut cfg = configs::DatabaseConfig::default();
        cfg.url = "sqlite::memory:".to_string();
        let db = connect_with_config(&cfg).await.expect("connect sqlite");
        migration::Migrator::up(&db, None).await.expect("migrate up");

        let am = crate::car::ActiveModel {
            condition: Set("Used".to_string()),
            make: Set("Chevrolet".to_string()),
            model: Set("Impala".to_string()),
            year: Set(2018),
            body: Set("sedan".to_string()),
            color: Set("white".to_string()),
            mileage: Set(32280),
            lat: Set(40.73061),
            lon: Set(-73.935242),
            created_at: Set(chrono::Utc::now().into()),
            modified_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        let stored = am.insert(&db).await.expect("insert car");
        assert!(stored.id > 0, "sqlite should assign an auto-increment id");

        let found = crate::car::Entity::find_by_id(stored.id)
            .one(&db)
            .await
            .expect("find car");
        assert_eq!(found.map(|c| c.make), Some("Chevrolet".to_string()));
    }
}
