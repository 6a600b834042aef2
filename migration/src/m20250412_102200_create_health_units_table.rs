use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HealthUnits::Table)
                    .if_not_exists()
                    .col(pk_auto(HealthUnits::Id))
                    .col(string(HealthUnits::Name))
                    .col(string(HealthUnits::Address))
                    .col(date_time(HealthUnits::CreatedAt))
                    .col(date_time(HealthUnits::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HealthUnits::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HealthUnits {
    Table,
    Id,
    Name,
    Address,
    CreatedAt,
    UpdatedAt,
}
