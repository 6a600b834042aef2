use crate::m20250426_091200_create_medical_records_table::MedicalRecords;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Medications::Table)
                    .if_not_exists()
                    .col(pk_auto(Medications::Id))
                    .col(string(Medications::Name))
                    .col(string(Medications::Dosage))
                    .col(integer(Medications::MedicalRecordId))
                    .col(date_time(Medications::CreatedAt))
                    .col(date_time(Medications::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-medications-medical-record")
                            .from(Medications::Table, Medications::MedicalRecordId)
                            .to(MedicalRecords::Table, MedicalRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Medications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Medications {
    Table,
    Id,
    Name,
    Dosage,
    MedicalRecordId,
    CreatedAt,
    UpdatedAt,
}
