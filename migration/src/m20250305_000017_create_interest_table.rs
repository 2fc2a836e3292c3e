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
                    .table(Interests::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Interests::Id))
                    .col(uuid(Interests::UserId))
                    .col(string_len(Interests::Name, 50))
                    .col(
                        timestamp_with_time_zone(Interests::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interests_user_id")
                            .from(Interests::Table, Interests::UserId)
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
                    .name("uq_interests_user_name")
                    .table(Interests::Table)
                    .col(Interests::UserId)
                    .col(Interests::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Interests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Interests {
    Table,
    Id,
    UserId,
    Name,
    CreatedAt,
}
