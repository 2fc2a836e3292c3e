use sea_orm_migration::{prelude::*, schema::*};

use crate::uuid_pk;

use super::m20250304_000013_create_opening_table::Openings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartnershipGroups::Table)
                    .if_not_exists()
                    .col(
                        uuid_pk(manager, PartnershipGroups::Id),
                    )
                    .col(uuid(PartnershipGroups::OpeningId))
                    .col(string_len(PartnershipGroups::Name, 100))
                    .col(
                        string_len(PartnershipGroups::Status, 20)
                            .default("forming")
                            .check(Expr::col(PartnershipGroups::Status).is_in([
                                "forming",
                                "active",
                                "dissolved",
                            ])),
                    )
                    .col(
                        timestamp_with_time_zone(PartnershipGroups::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(PartnershipGroups::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partnership_groups_opening_id")
                            .from(PartnershipGroups::Table, PartnershipGroups::OpeningId)
                            .to(Openings::Table, Openings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_partnership_groups_opening_name")
                    .table(PartnershipGroups::Table)
                    .col(PartnershipGroups::OpeningId)
                    .col(PartnershipGroups::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PartnershipGroups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PartnershipGroups {
    Table,
    Id,
    OpeningId,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
}
