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
                    .table(Reactions::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Reactions::Id))
                    .col(uuid(Reactions::UserId))
                    .col(
                        string_len(Reactions::TargetType, 20).check(
                            Expr::col(Reactions::TargetType).is_in([
                                "forum_comment",
                                "group_comment",
                                "feedback_comment",
                                "service",
                            ]),
                        ),
                    )
                    .col(uuid(Reactions::TargetId))
                    .col(
                        string_len(Reactions::Kind, 20).check(Expr::col(Reactions::Kind).is_in([
                            "like", "love", "laugh", "sad", "angry",
                        ])),
                    )
                    .col(
                        timestamp_with_time_zone(Reactions::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reactions_user_id")
                            .from(Reactions::Table, Reactions::UserId)
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
                    .name("uq_reactions_user_target")
                    .table(Reactions::Table)
                    .col(Reactions::UserId)
                    .col(Reactions::TargetType)
                    .col(Reactions::TargetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reactions_target")
                    .table(Reactions::Table)
                    .col(Reactions::TargetType)
                    .col(Reactions::TargetId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reactions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reactions {
    Table,
    Id,
    UserId,
    TargetType,
    TargetId,
    Kind,
    CreatedAt,
}
