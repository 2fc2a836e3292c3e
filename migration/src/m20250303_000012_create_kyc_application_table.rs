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
                    .table(KycApplications::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, KycApplications::Id))
                    .col(uuid(KycApplications::UserId))
                    .col(string_len(KycApplications::FullName, 120))
                    .col(
                        string_len(KycApplications::DocumentType, 20).check(
                            Expr::col(KycApplications::DocumentType).is_in([
                                "passport",
                                "national_id",
                                "drivers_license",
                            ]),
                        ),
                    )
                    .col(string_len(KycApplications::DocumentNumber, 60))
                    .col(string(KycApplications::DocumentFront))
                    .col(string_null(KycApplications::DocumentBack))
                    .col(string_null(KycApplications::Selfie))
                    .col(
                        string_len(KycApplications::Status, 20)
                            .default("pending")
                            .check(Expr::col(KycApplications::Status).is_in([
                                "pending", "approved", "rejected",
                            ])),
                    )
                    .col(uuid_null(KycApplications::ReviewerId))
                    .col(text_null(KycApplications::RejectionReason))
                    .col(timestamp_with_time_zone_null(KycApplications::ReviewedAt))
                    .col(
                        timestamp_with_time_zone(KycApplications::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(KycApplications::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kyc_applications_user_id")
                            .from(KycApplications::Table, KycApplications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kyc_applications_reviewer_id")
                            .from(KycApplications::Table, KycApplications::ReviewerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KycApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KycApplications {
    Table,
    Id,
    UserId,
    FullName,
    DocumentType,
    DocumentNumber,
    DocumentFront,
    DocumentBack,
    Selfie,
    Status,
    ReviewerId,
    RejectionReason,
    ReviewedAt,
    CreatedAt,
    UpdatedAt,
}
