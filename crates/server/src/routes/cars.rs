use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::JsonApiError;
use service::car::{AppCarService, Car};

/// List all cars, unenriched.
pub async fn list_cars(
    State(svc): State<Arc<AppCarService>>,
) -> Result<Json<Vec<Car>>, JsonApiError> {
    Ok(Json(svc.list().await?))
}

/// Get one car, enriched with price and address.
pub async fn get_car(
    State(svc): State<Arc<AppCarService>>,
    Path(id): Path<i64>,
) -> Result<Json<Car>, JsonApiError> {
    Ok(Json(svc.find_by_id(id).await?))
}

/// Create a car. A body carrying an id is treated as an update request,
/// matching the save semantics of the service.
pub async fn create_car(
    State(svc): State<Arc<AppCarService>>,
    Json(input): Json<Car>,
) -> Result<(StatusCode, Json<Car>), JsonApiError> {
    let saved = svc.save(input).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Update a car; the path id wins over any id in the body.
pub async fn update_car(
    State(svc): State<Arc<AppCarService>>,
    Path(id): Path<i64>,
    Json(mut input): Json<Car>,
) -> Result<Json<Car>, JsonApiError> {
    input.id = Some(id);
    Ok(Json(svc.save(input).await?))
}

/// Delete a car.
pub async fn delete_car(
    State(svc): State<Arc<AppCarService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
