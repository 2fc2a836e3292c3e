use sea_orm_migration::{prelude::*, schema::*};

use crate::uuid_pk;

use super::m20250301_000001_create_plan_table::Plans;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Users::Id))
                    .col(string_len(Users::FirstName, 50))
                    .col(string_len(Users::LastName, 50))
                    .col(string_len_uniq(Users::Username, 30))
                    .col(string_len_uniq(Users::Email, 255))
                    .col(string(Users::PasswordHash))
                    .col(string_len_null(Users::Phone, 20))
                    .col(text_null(Users::Bio))
                    .col(string_null(Users::Avatar))
                    .col(string_len_null(Users::Location, 100))
                    .col(
                        string_len(Users::Role, 20)
                            .default("user")
                            .check(Expr::col(Users::Role).is_in(["user", "admin"])),
                    )
                    .col(
                        string_len(Users::Status, 20)
                            .default("active")
                            .check(Expr::col(Users::Status).is_in([
                                "active",
                                "suspended",
                                "deactivated",
                            ])),
                    )
                    .col(boolean(Users::EmailVerified).default(false))
                    .col(boolean(Users::PhoneVerified).default(false))
                    .col(boolean(Users::KycVerified).default(false))
                    .col(uuid_null(Users::PlanId))
                    .col(
                        timestamp_with_time_zone(Users::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Users::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_plan_id")
                            .from(Users::Table, Users::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Username,
    Email,
    PasswordHash,
    Phone,
    Bio,
    Avatar,
    Location,
    Role,
    Status,
    EmailVerified,
    PhoneVerified,
    KycVerified,
    PlanId,
    CreatedAt,
    UpdatedAt,
}
