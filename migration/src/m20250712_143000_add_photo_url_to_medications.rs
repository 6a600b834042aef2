use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Medications::Table)
                    .add_column(string_null(Medications::PhotoUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Medications::Table)
                    .drop_column(Medications::PhotoUrl)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Medications {
    Table,
    PhotoUrl,
}
