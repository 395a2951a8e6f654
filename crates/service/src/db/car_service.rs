use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::car::{Car, CarDetails};
use crate::errors::ServiceError;
use models::car;

/// List all stored cars.
pub async fn list_cars(db: &DatabaseConnection) -> Result<Vec<car::Model>, ServiceError> {
    car::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get a car by id.
pub async fn get_car(db: &DatabaseConnection, id: i64) -> Result<Option<car::Model>, ServiceError> {
    car::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Insert a new car row; the database assigns the id.
pub async fn create_car(db: &DatabaseConnection, input: &Car) -> Result<car::Model, ServiceError> {
    let now = Utc::now();
    let am = car::ActiveModel {
        condition: Set(input.condition.as_str().to_string()),
        make: Set(input.details.make.clone()),
        model: Set(input.details.model.clone()),
        year: Set(input.details.year),
        body: Set(input.details.body.clone()),
        color: Set(input.details.color.clone()),
        mileage: Set(input.details.mileage),
        lat: Set(input.location.lat),
        lon: Set(input.location.lon),
        created_at: Set(now.into()),
        modified_at: Set(now.into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Overwrite the details and location of an existing row. Id, condition and
/// created_at stay as stored; modified_at is touched.
pub async fn update_car(
    db: &DatabaseConnection,
    id: i64,
    details: &CarDetails,
    lat: f64,
    lon: f64,
) -> Result<car::Model, ServiceError> {
    let mut am: car::ActiveModel = car::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::car_not_found(id))?
        .into();
    am.make = Set(details.make.clone());
    am.model = Set(details.model.clone());
    am.year = Set(details.year);
    am.body = Set(details.body.clone());
    am.color = Set(details.color.clone());
    am.mileage = Set(details.mileage);
    am.lat = Set(lat);
    am.lon = Set(lon);
    am.modified_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a car by id; returns whether a row was removed.
pub async fn delete_car(db: &DatabaseConnection, id: i64) -> Result<bool, ServiceError> {
    let res = car::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
