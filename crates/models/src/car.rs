use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted car record. Price and address never appear here; they are
/// transient and merged in at the service layer on single-car reads.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub condition: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub body: String,
    pub color: String,
    pub mileage: i32,
    pub lat: f64,
    pub lon: f64,
    pub created_at: DateTimeWithTimeZone,
    pub modified_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
