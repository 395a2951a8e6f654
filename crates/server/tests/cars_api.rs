use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use httpmock::prelude::*;
use migration::MigratorTrait;
use tower::util::ServiceExt;
use tower_http::cors::CorsLayer;

use service::car::{CarService, SeaOrmCarRepository};
use service::clients::{HttpMapsClient, HttpPriceClient};

/// Full wiring against a migrated in-memory database and one httpmock server
/// standing in for both collaborators.
async fn test_app(collaborators: &MockServer) -> Router {
    let mut cfg = configs::DatabaseConfig::default();
    cfg.url = "sqlite::memory:".to_string();
    let db = models::db::connect_with_config(&cfg).await.expect("connect");
    migration::Migrator::up(&db, None).await.expect("migrate");

    let svc = Arc::new(CarService::new(
        Arc::new(SeaOrmCarRepository::new(db)),
        Arc::new(HttpPriceClient::new(collaborators.base_url())),
        Arc::new(HttpMapsClient::new(collaborators.base_url())),
    ));
    server::routes::build_router(svc, CorsLayer::very_permissive())
}

async fn mock_collaborators(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/services/price");
            then.status(200)
                .json_body(serde_json::json!({"vehicleId": 1, "price": 15499.99}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/maps");
            then.status(200).json_body(serde_json::json!({
                "address": "777 Brockton Avenue",
                "city": "Abington",
                "state": "MA",
                "zip": "02351"
            }));
        })
        .await;
}

fn impala_json() -> serde_json::Value {
    serde_json::json!({
        "condition": "Used",
        "details": {
            "make": "Chevrolet",
            "model": "Impala",
            "year": 2018,
            "body": "sedan",
            "color": "white",
            "mileage": 32280
        },
        "location": { "lat": 40.73061, "lon": -73.935242 }
    })
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let res = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");
    let status = res.status();
    let bytes = res.into_body().collect().await.expect("body").to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

#[tokio::test]
async fn health_is_ok() {
    let collaborators = MockServer::start_async().await;
    let app = test_app(&collaborators).await;
    let (status, body) = send_json(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_then_list_and_get_enriched() {
    let collaborators = MockServer::start_async().await;
    mock_collaborators(&collaborators).await;
    let app = test_app(&collaborators).await;

    let (status, created) = send_json(&app, "POST", "/cars", Some(impala_json())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id assigned");

    let (status, all) = send_json(&app, "GET", "/cars", None).await;
    assert_eq!(status, StatusCode::OK);
    let all = all.as_array().expect("array");
    assert_eq!(all.len(), 1);
    assert!(all[0].get("price").is_none(), "list must stay unenriched");

    let (status, car) = send_json(&app, "GET", &format!("/cars/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(car["price"], "15499.99");
    assert_eq!(car["location"]["address"], "777 Brockton Avenue");
    assert_eq!(car["location"]["city"], "Abington");
    assert_eq!(car["location"]["zip"], "02351");
}

#[tokio::test]
async fn get_unknown_car_is_404() {
    let collaborators = MockServer::start_async().await;
    let app = test_app(&collaborators).await;
    let (status, body) = send_json(&app, "GET", "/cars/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn put_updates_details_keeping_id_and_condition() {
    let collaborators = MockServer::start_async().await;
    mock_collaborators(&collaborators).await;
    let app = test_app(&collaborators).await;

    let (_, created) = send_json(&app, "POST", "/cars", Some(impala_json())).await;
    let id = created["id"].as_i64().expect("id");

    let mut update = impala_json();
    update["condition"] = serde_json::json!("New"); // ignored on update
    update["details"]["model"] = serde_json::json!("Malibu");
    update["location"]["lat"] = serde_json::json!(34.0522);

    let (status, updated) = send_json(&app, "PUT", &format!("/cars/{}", id), Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["condition"], "Used");
    assert_eq!(updated["details"]["model"], "Malibu");
    assert_eq!(updated["location"]["lat"], 34.0522);
}

#[tokio::test]
async fn put_unknown_car_is_404() {
    let collaborators = MockServer::start_async().await;
    let app = test_app(&collaborators).await;
    let (status, _) = send_json(&app, "PUT", "/cars/999", Some(impala_json())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let collaborators = MockServer::start_async().await;
    mock_collaborators(&collaborators).await;
    let app = test_app(&collaborators).await;

    let (_, created) = send_json(&app, "POST", "/cars", Some(impala_json())).await;
    let id = created["id"].as_i64().expect("id");

    let (status, _) = send_json(&app, "DELETE", &format!("/cars/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_json(&app, "GET", &format!("/cars/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, "DELETE", &format!("/cars/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn downstream_failure_is_bad_gateway() {
    let collaborators = MockServer::start_async().await;
    collaborators
        .mock_async(|when, then| {
            when.method(GET).path("/services/price");
            then.status(500);
        })
        .await;
    let app = test_app(&collaborators).await;

    let (_, created) = send_json(&app, "POST", "/cars", Some(impala_json())).await;
    let id = created["id"].as_i64().expect("id");

    let (status, body) = send_json(&app, "GET", &format!("/cars/{}", id), None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Bad Gateway");
}
