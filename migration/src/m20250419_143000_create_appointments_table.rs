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
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointments::Id))
                    .col(date_time(Appointments::ScheduledAt))
                    .col(string(Appointments::Status))
                    .col(integer(Appointments::UserId))
                    .col(integer(Appointments::ProfessionalId))
                    .col(date_time(Appointments::CreatedAt))
                    .col(date_time(Appointments::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-appointments-user")
                            .from(Appointments::Table, Appointments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-appointments-professional")
                            .from(Appointments::Table, Appointments::ProfessionalId)
                            .to(Professionals::Table, Professionals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointments {
    Table,
    Id,
    ScheduledAt,
    Status,
    UserId,
    ProfessionalId,
    CreatedAt,
    UpdatedAt,
}
