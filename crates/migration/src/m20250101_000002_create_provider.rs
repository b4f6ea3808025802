//! Create `provider` table.
//!
//! `service_type` is free text matched against service names; there is no
//! foreign key to `service`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Provider::Table)
                    .if_not_exists()
                    .col(pk_auto(Provider::Id))
                    .col(string_len(Provider::Name, 128))
                    .col(string_len(Provider::ServiceType, 128))
                    .col(string_len_null(Provider::Price, 64))
                    .col(string_len_null(Provider::Gender, 32))
                    .col(string_len_null(Provider::Phone, 32))
                    .col(double_null(Provider::Rating))
                    .col(double_null(Provider::Lat))
                    .col(double_null(Provider::Lng))
                    .col(string_len_null(Provider::Image, 512))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Provider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Provider {
    Table,
    Id,
    Name,
    ServiceType,
    Price,
    Gender,
    Phone,
    Rating,
    Lat,
    Lng,
    Image,
}
