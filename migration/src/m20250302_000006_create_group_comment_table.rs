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
                    .table(GroupComments::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, GroupComments::Id))
                    .col(uuid(GroupComments::GroupId))
                    .col(uuid(GroupComments::UserId))
                    .col(uuid_null(GroupComments::ParentId))
                    .col(text(GroupComments::Body))
                    .col(
                        timestamp_with_time_zone(GroupComments::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(GroupComments::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_comments_group_id")
                            .from(GroupComments::Table, GroupComments::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_comments_user_id")
                            .from(GroupComments::Table, GroupComments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_comments_parent_id")
                            .from(GroupComments::Table, GroupComments::ParentId)
                            .to(GroupComments::Table, GroupComments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupComments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupComments {
    Table,
    Id,
    GroupId,
    UserId,
    ParentId,
    Body,
    CreatedAt,
    UpdatedAt,
}
