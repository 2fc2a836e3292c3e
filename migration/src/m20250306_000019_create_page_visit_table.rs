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
                    .table(PageVisits::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, PageVisits::Id))
                    .col(uuid_null(PageVisits::UserId))
                    .col(string_len(PageVisits::Path, 255))
                    .col(string_null(PageVisits::Referrer))
                    .col(string_len_null(PageVisits::IpAddress, 45))
                    .col(string_null(PageVisits::UserAgent))
                    .col(
                        timestamp_with_time_zone(PageVisits::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_page_visits_user_id")
                            .from(PageVisits::Table, PageVisits::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_page_visits_path")
                    .table(PageVisits::Table)
                    .col(PageVisits::Path)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageVisits::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PageVisits {
    Table,
    Id,
    UserId,
    Path,
    Referrer,
    IpAddress,
    UserAgent,
    CreatedAt,
}
