use axum::{
    extract::Query,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use common::types::{Address, Health};

use crate::repository;

#[derive(Debug, Deserialize)]
pub struct MapsQuery {
    pub lat: f64,
    pub lon: f64,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `GET /maps?lat=&lon=` — the lookup the vehicles service calls per read.
/// Missing or unparsable parameters are rejected with 400 by the extractor.
pub async fn get_address(Query(q): Query<MapsQuery>) -> Json<Address> {
    Json(repository::address_for(q.lat, q.lon))
}

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/maps", get(get_address))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false)),
        )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    use super::*;

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let res = build_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = res.status();
        let bytes = res.into_body().collect().await.expect("body").to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn returns_address_for_coordinate() {
        let (status, body) = get("/maps?lat=40.73061&lon=-73.935242").await;
        assert_eq!(status, StatusCode::OK);
        let addr: Address = serde_json::from_slice(&body).expect("address json");
        assert_eq!(addr, repository::address_for(40.73061, -73.935242));
    }

    #[tokio::test]
    async fn missing_params_are_rejected() {
        let (status, _) = get("/maps?lat=40.7").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, _) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
    }
}
