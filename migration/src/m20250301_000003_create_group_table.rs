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
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Groups::Id))
                    .col(uuid(Groups::OwnerId))
                    .col(string_len(Groups::Name, 100))
                    .col(string_len_uniq(Groups::Slug, 120))
                    .col(text_null(Groups::Description))
                    .col(string_null(Groups::CoverImage))
                    .col(
                        string_len(Groups::Privacy, 20)
                            .default("public")
                            .check(Expr::col(Groups::Privacy).is_in(["public", "private"])),
                    )
                    .col(
                        timestamp_with_time_zone(Groups::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Groups::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_groups_owner_id")
                            .from(Groups::Table, Groups::OwnerId)
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
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Groups {
    Table,
    Id,
    OwnerId,
    Name,
    Slug,
    Description,
    CoverImage,
    Privacy,
    CreatedAt,
    UpdatedAt,
}
