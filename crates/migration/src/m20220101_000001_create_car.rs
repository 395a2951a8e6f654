use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Price and address columns are deliberately absent: both are fetched
        // live from the collaborators on every read.
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(big_integer(Car::Id).auto_increment().primary_key())
                    .col(string_len(Car::Condition, 16).not_null())
                    .col(string_len(Car::Make, 64).not_null())
                    .col(string_len(Car::Model, 64).not_null())
                    .col(integer(Car::Year).not_null())
                    .col(string_len(Car::Body, 64).not_null())
                    .col(string_len(Car::Color, 64).not_null())
                    .col(integer(Car::Mileage).not_null())
                    .col(double(Car::Lat).not_null())
                    .col(double(Car::Lon).not_null())
                    .col(timestamp_with_time_zone(Car::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Car::ModifiedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Car::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Car {
    Table,
    Id,
    Condition,
    Make,
    Model,
    Year,
    Body,
    Color,
    Mileage,
    Lat,
    Lon,
    CreatedAt,
    ModifiedAt,
}
