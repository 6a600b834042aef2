use crate::m20250419_143000_create_appointments_table::Appointments;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Referrals::Table)
                    .add_column(integer_null(Referrals::AppointmentId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk-referrals-appointment")
                    .from(Referrals::Table, Referrals::AppointmentId)
                    .to(Appointments::Table, Appointments::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(MedicalRecords::Table)
                    .add_column(integer_null(MedicalRecords::ReferralId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk-medical-records-referral")
                    .from(MedicalRecords::Table, MedicalRecords::ReferralId)
                    .to(Referrals::Table, Referrals::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await
    }

    // Undone in reverse order: the medical_records link first, then referrals.
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(MedicalRecords::Table)
                    .drop_column(MedicalRecords::ReferralId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Referrals::Table)
                    .drop_column(Referrals::AppointmentId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Referrals {
    Table,
    Id,
    AppointmentId,
}

#[derive(DeriveIden)]
enum MedicalRecords {
    Table,
    ReferralId,
}
