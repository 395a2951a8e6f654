use async_trait::async_trait;

use crate::errors::ServiceError;
use common::types::Price;

/// Outbound port for the pricing collaborator.
#[async_trait]
pub trait PriceClient: Send + Sync {
    async fn price_for(&self, vehicle_id: i64) -> Result<Price, ServiceError>;
}

/// reqwest-backed client calling `GET {base}/services/price?vehicleId={id}`.
pub struct HttpPriceClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPriceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }
}

#[async_trait]
impl PriceClient for HttpPriceClient {
    async fn price_for(&self, vehicle_id: i64) -> Result<Price, ServiceError> {
        let url = format!("{}/services/price", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("vehicleId", vehicle_id.to_string())])
            .send()
            .await
            .map_err(|e| ServiceError::Downstream(format!("pricing request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| ServiceError::Downstream(format!("pricing returned error: {}", e)))?;
        resp.json::<Price>()
            .await
            .map_err(|e| ServiceError::Downstream(format!("pricing response malformed: {}", e)))
    }
}
