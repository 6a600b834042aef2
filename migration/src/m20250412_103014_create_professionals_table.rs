use crate::m20250412_101500_create_users_table::Users;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professionals::Table)
                    .if_not_exists()
                    .col(pk_auto(Professionals::Id))
                    .col(string(Professionals::Name))
                    .col(string(Professionals::Specialty))
                    .col(integer(Professionals::UserId))
                    .col(date_time(Professionals::CreatedAt))
                    .col(date_time(Professionals::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-professionals-user")
                            .from(Professionals::Table, Professionals::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Professionals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Professionals {
    Table,
    Id,
    Name,
    Specialty,
    UserId,
    CreatedAt,
    UpdatedAt,
}
