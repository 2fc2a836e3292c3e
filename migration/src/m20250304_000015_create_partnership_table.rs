use sea_orm_migration::{prelude::*, schema::*};

use crate::uuid_pk;

use super::{
    m20250301_000002_create_user_table::Users, m20250304_000013_create_opening_table::Openings,
    m20250304_000014_create_partnership_group_table::PartnershipGroups,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Partnerships::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Partnerships::Id))
                    .col(uuid(Partnerships::OpeningId))
                    .col(uuid(Partnerships::UserId))
                    .col(uuid_null(Partnerships::PartnershipGroupId))
                    .col(text_null(Partnerships::Message))
                    .col(
                        string_len(Partnerships::Status, 20)
                            .default("pending")
                            .check(Expr::col(Partnerships::Status).is_in([
                                "pending",
                                "accepted",
                                "rejected",
                                "withdrawn",
                            ])),
                    )
                    .col(
                        timestamp_with_time_zone(Partnerships::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Partnerships::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partnerships_opening_id")
                            .from(Partnerships::Table, Partnerships::OpeningId)
                            .to(Openings::Table, Openings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partnerships_user_id")
                            .from(Partnerships::Table, Partnerships::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partnerships_partnership_group_id")
                            .from(Partnerships::Table, Partnerships::PartnershipGroupId)
                            .to(PartnershipGroups::Table, PartnershipGroups::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Partnerships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Partnerships {
    Table,
    Id,
    OpeningId,
    UserId,
    PartnershipGroupId,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
