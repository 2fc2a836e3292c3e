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
                    .table(Verifications::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Verifications::Id))
                    .col(uuid(Verifications::UserId))
                    .col(
                        string_len(Verifications::Channel, 20)
                            .check(Expr::col(Verifications::Channel).is_in(["email", "phone"])),
                    )
                    .col(string_len(Verifications::Code, 6))
                    .col(timestamp_with_time_zone(Verifications::ExpiresAt))
                    .col(timestamp_with_time_zone_null(Verifications::VerifiedAt))
                    .col(
                        timestamp_with_time_zone(Verifications::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_verifications_user_id")
                            .from(Verifications::Table, Verifications::UserId)
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
            .drop_table(Table::drop().table(Verifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Verifications {
    Table,
    Id,
    UserId,
    Channel,
    Code,
    ExpiresAt,
    VerifiedAt,
    CreatedAt,
}
