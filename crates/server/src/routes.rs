use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::car::AppCarService;

pub mod cars;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the vehicles API router: health plus the cars CRUD surface.
pub fn build_router(state: Arc<AppCarService>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cars", get(cars::list_cars).post(cars::create_car))
        .route(
            "/cars/:id",
            get(cars::get_car).put(cars::update_car).delete(cars::delete_car),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
