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
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Reports::Id))
                    .col(uuid(Reports::ReporterId))
                    .col(
                        string_len(Reports::TargetType, 20).check(
                            Expr::col(Reports::TargetType).is_in([
                                "user",
                                "group",
                                "service",
                                "forum_comment",
                                "group_comment",
                                "feedback_comment",
                            ]),
                        ),
                    )
                    .col(uuid(Reports::TargetId))
                    .col(string_len(Reports::Reason, 120))
                    .col(text_null(Reports::Details))
                    .col(
                        string_len(Reports::Status, 20)
                            .default("pending")
                            .check(Expr::col(Reports::Status).is_in([
                                "pending",
                                "reviewed",
                                "dismissed",
                                "actioned",
                            ])),
                    )
                    .col(
                        timestamp_with_time_zone(Reports::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Reports::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_reporter_id")
                            .from(Reports::Table, Reports::ReporterId)
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
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reports {
    Table,
    Id,
    ReporterId,
    TargetType,
    TargetId,
    Reason,
    Details,
    Status,
    CreatedAt,
    UpdatedAt,
}
