use sea_orm_migration::{prelude::*, schema::*};

use crate::uuid_pk;

use super::{
    m20250301_000001_create_plan_table::Plans, m20250301_000002_create_user_table::Users,
    m20250301_000004_create_service_table::Services,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Payments::Id))
                    .col(uuid(Payments::UserId))
                    .col(uuid_null(Payments::PlanId))
                    .col(uuid_null(Payments::ServiceId))
                    .col(
                        big_integer(Payments::AmountCents)
                            .check(Expr::col(Payments::AmountCents).gt(0)),
                    )
                    .col(string_len(Payments::Currency, 3))
                    .col(string_len(Payments::Provider, 30))
                    .col(string_len_uniq(Payments::ProviderReference, 120))
                    .col(
                        string_len(Payments::Status, 20)
                            .default("pending")
                            .check(Expr::col(Payments::Status).is_in([
                                "pending",
                                "succeeded",
                                "failed",
                                "refunded",
                            ])),
                    )
                    .col(
                        timestamp_with_time_zone(Payments::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Payments::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_user_id")
                            .from(Payments::Table, Payments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_plan_id")
                            .from(Payments::Table, Payments::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_service_id")
                            .from(Payments::Table, Payments::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payments {
    Table,
    Id,
    UserId,
    PlanId,
    ServiceId,
    AmountCents,
    Currency,
    Provider,
    ProviderReference,
    Status,
    CreatedAt,
    UpdatedAt,
}
