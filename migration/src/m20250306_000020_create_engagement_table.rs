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
                    .table(Engagements::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Engagements::Id))
                    .col(uuid(Engagements::UserId))
                    .col(
                        string_len(Engagements::TargetType, 20).check(
                            Expr::col(Engagements::TargetType).is_in([
                                "group",
                                "service",
                                "opening",
                                "forum_comment",
                                "user",
                            ]),
                        ),
                    )
                    .col(uuid(Engagements::TargetId))
                    .col(
                        string_len(Engagements::Action, 20).check(
                            Expr::col(Engagements::Action)
                                .is_in(["view", "click", "share", "save"]),
                        ),
                    )
                    .col(
                        timestamp_with_time_zone(Engagements::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_engagements_user_id")
                            .from(Engagements::Table, Engagements::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_engagements_target")
                    .table(Engagements::Table)
                    .col(Engagements::TargetType)
                    .col(Engagements::TargetId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Engagements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Engagements {
    Table,
    Id,
    UserId,
    TargetType,
    TargetId,
    Action,
    CreatedAt,
}
