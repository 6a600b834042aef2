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
                    .table(Referrals::Table)
                    .if_not_exists()
                    .col(pk_auto(Referrals::Id))
                    .col(string(Referrals::Specialty))
                    .col(string_null(Referrals::Notes))
                    .col(integer(Referrals::UserId))
                    .col(integer(Referrals::ProfessionalId))
                    .col(date_time(Referrals::CreatedAt))
                    .col(date_time(Referrals::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-referrals-user")
                            .from(Referrals::Table, Referrals::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-referrals-professional")
                            .from(Referrals::Table, Referrals::ProfessionalId)
                            .to(Professionals::Table, Professionals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Referrals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Referrals {
    Table,
    Id,
    Specialty,
    Notes,
    UserId,
    ProfessionalId,
    CreatedAt,
    UpdatedAt,
}
