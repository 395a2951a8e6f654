use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// JSON error body returned by the vehicles API.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({
            "error": self.title,
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => {
                JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))
            }
            ServiceError::Validation(msg) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::Downstream(msg) => {
                JsonApiError::new(StatusCode::BAD_GATEWAY, "Bad Gateway", Some(msg))
            }
            other => JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                Some(other.to_string()),
            ),
        }
    }
}
