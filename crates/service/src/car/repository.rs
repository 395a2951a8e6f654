use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::car::{Car, CarDetails};
use crate::errors::ServiceError;

/// Storage port for car records.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<models::car::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<models::car::Model>, ServiceError>;
    async fn insert(&self, input: &Car) -> Result<models::car::Model, ServiceError>;
    async fn update(
        &self,
        id: i64,
        details: &CarDetails,
        lat: f64,
        lon: f64,
    ) -> Result<models::car::Model, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCarRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarRepository for SeaOrmCarRepository {
    async fn find_all(&self) -> Result<Vec<models::car::Model>, ServiceError> {
        crate::db::car_service::list_cars(&self.db).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<models::car::Model>, ServiceError> {
        crate::db::car_service::get_car(&self.db, id).await
    }

    async fn insert(&self, input: &Car) -> Result<models::car::Model, ServiceError> {
        crate::db::car_service::create_car(&self.db, input).await
    }

    async fn update(
        &self,
        id: i64,
        details: &CarDetails,
        lat: f64,
        lon: f64,
    ) -> Result<models::car::Model, ServiceError> {
        crate::db::car_service::update_car(&self.db, id, details, lat, lon).await
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        crate::db::car_service::delete_car(&self.db, id).await
    }
}
