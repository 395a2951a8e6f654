use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use models::car;

/// Whether a car is sold as new or used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ServiceError> {
        match s {
            "New" => Ok(Condition::New),
            "Used" => Ok(Condition::Used),
            other => Err(ServiceError::Validation(format!(
                "unknown car condition: {}",
                other
            ))),
        }
    }
}

/// Static details of a car; the fields a client may change on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDetails {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub body: String,
    pub color: String,
    pub mileage: i32,
}

/// Car position. The postal address fields are transient: never persisted,
/// populated only when a single car is read and the maps collaborator answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, address: None, city: None, state: None, zip: None }
    }
}

/// API shape of a car record. `price` is transient, fetched from the pricing
/// collaborator per read and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub condition: Condition,
    pub details: CarDetails,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<chrono::DateTime<chrono::FixedOffset>>,
}

impl Car {
    /// Build the API shape from a stored row, transient fields empty.
    pub fn from_model(m: car::Model) -> Result<Self, ServiceError> {
        Ok(Self {
            id: Some(m.id),
            condition: Condition::parse(&m.condition)?,
            details: CarDetails {
                make: m.make,
                model: m.model,
                year: m.year,
                body: m.body,
                color: m.color,
                mileage: m.mileage,
            },
            location: Location::new(m.lat, m.lon),
            price: None,
            created_at: Some(m.created_at),
            modified_at: Some(m.modified_at),
        })
    }
}
