use sea_orm_migration::{prelude::*, schema::*};

use crate::uuid_pk;

use super::{
    m20250301_000002_create_user_table::Users, m20250301_000003_create_group_table::Groups,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Services::Id))
                    .col(uuid(Services::UserId))
                    .col(uuid_null(Services::GroupId))
                    .col(string_len(Services::Title, 120))
                    .col(string_len_uniq(Services::Slug, 140))
                    .col(text(Services::Description))
                    .col(string_len(Services::Category, 60))
                    .col(
                        big_integer(Services::PriceCents)
                            .check(Expr::col(Services::PriceCents).gte(0)),
                    )
                    .col(string_len(Services::Currency, 3))
                    .col(
                        string_len(Services::Status, 20)
                            .default("draft")
                            .check(Expr::col(Services::Status).is_in([
                                "draft",
                                "published",
                                "archived",
                            ])),
                    )
                    .col(string_null(Services::Media))
                    .col(
                        timestamp_with_time_zone(Services::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Services::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_user_id")
                            .from(Services::Table, Services::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_group_id")
                            .from(Services::Table, Services::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_services_category")
                    .table(Services::Table)
                    .col(Services::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Services {
    Table,
    Id,
    UserId,
    GroupId,
    Title,
    Slug,
    Description,
    Category,
    PriceCents,
    Currency,
    Status,
    Media,
    CreatedAt,
    UpdatedAt,
}
