use sea_orm_migration::{prelude::*, schema::*};

use crate::uuid_pk;

use super::m20250301_000002_create_user_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Openings::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Openings::Id))
                    .col(uuid(Openings::OwnerId))
                    .col(string_len(Openings::Title, 120))
                    .col(text(Openings::Description))
                    .col(string_len(Openings::Category, 60))
                    .col(integer(Openings::Slots).check(Expr::col(Openings::Slots).between(1, 100)))
                    .col(
                        string_len(Openings::Status, 20)
                            .default("open")
                            .check(Expr::col(Openings::Status).is_in(["open", "closed", "filled"])),
                    )
                    .col(
                        timestamp_with_time_zone(Openings::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Openings::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_openings_owner_id")
                            .from(Openings::Table, Openings::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Openings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Openings {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    Category,
    Slots,
    Status,
    CreatedAt,
    UpdatedAt,
}
