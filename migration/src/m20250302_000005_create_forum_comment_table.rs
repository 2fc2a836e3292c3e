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
                    .table(ForumComments::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, ForumComments::Id))
                    .col(uuid(ForumComments::UserId))
                    .col(uuid_null(ForumComments::ParentId))
                    .col(string_len(ForumComments::Topic, 120))
                    .col(text(ForumComments::Body))
                    .col(
                        timestamp_with_time_zone(ForumComments::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ForumComments::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_comments_user_id")
                            .from(ForumComments::Table, ForumComments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_comments_parent_id")
                            .from(ForumComments::Table, ForumComments::ParentId)
                            .to(ForumComments::Table, ForumComments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_forum_comments_topic")
                    .table(ForumComments::Table)
                    .col(ForumComments::Topic)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ForumComments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ForumComments {
    Table,
    Id,
    UserId,
    ParentId,
    Topic,
    Body,
    CreatedAt,
    UpdatedAt,
}
