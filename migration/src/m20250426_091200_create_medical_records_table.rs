use crate::m20250412_101500_create_users_table::Users;
use crate::m20250412_103014_create_professionals_table::Professionals;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicalRecords::Table)
                    .if_not_exists()
                    .col(pk_auto(MedicalRecords::Id))
                    .col(text(MedicalRecords::Description))
                    .col(integer(MedicalRecords::UserId))
                    .col(integer(MedicalRecords::ProfessionalId))
                    .col(date_time(MedicalRecords::CreatedAt))
                    .col(date_time(MedicalRecords::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-medical-records-user")
                            .from(MedicalRecords::Table, MedicalRecords::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-medical-records-professional")
                            .from(MedicalRecords::Table, MedicalRecords::ProfessionalId)
                            .to(Professionals::Table, Professionals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicalRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MedicalRecords {
    Table,
    Id,
    Description,
    UserId,
    ProfessionalId,
    CreatedAt,
    UpdatedAt,
}
