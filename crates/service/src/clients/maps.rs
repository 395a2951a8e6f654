use async_trait::async_trait;

use crate::errors::ServiceError;
use common::types::Address;

/// Outbound port for the maps collaborator.
#[async_trait]
pub trait MapsClient: Send + Sync {
    async fn address_for(&self, lat: f64, lon: f64) -> Result<Address, ServiceError>;
}

/// reqwest-backed client calling `GET {base}/maps?lat={lat}&lon={lon}`.
pub struct HttpMapsClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMapsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }
}

#[async_trait]
impl MapsClient for HttpMapsClient {
    async fn address_for(&self, lat: f64, lon: f64) -> Result<Address, ServiceError> {
        let url = format!("{}/maps", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            .send()
            .await
            .map_err(|e| ServiceError::Downstream(format!("maps request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| ServiceError::Downstream(format!("maps returned error: {}", e)))?;
        resp.json::<Address>()
            .await
            .map_err(|e| ServiceError::Downstream(format!("maps response malformed: {}", e)))
    }
}
