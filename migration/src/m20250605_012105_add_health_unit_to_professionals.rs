use crate::m20250412_102200_create_health_units_table::HealthUnits;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Professionals::Table)
                    .add_column(integer_null(Professionals::HealthUnitId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk-professionals-health-unit")
                    .from(Professionals::Table, Professionals::HealthUnitId)
                    .to(HealthUnits::Table, HealthUnits::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Professionals::Table)
                    .drop_column(Professionals::HealthUnitId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Professionals {
    Table,
    HealthUnitId,
}
