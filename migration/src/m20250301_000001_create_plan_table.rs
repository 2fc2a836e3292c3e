use sea_orm_migration::{prelude::*, schema::*};

use crate::uuid_pk;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plans::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Plans::Id))
                    .col(string_len_uniq(Plans::Name, 60))
                    .col(text_null(Plans::Description))
                    .col(
                        big_integer(Plans::PriceCents)
                            .check(Expr::col(Plans::PriceCents).gte(0)),
                    )
                    .col(string_len(Plans::Currency, 3))
                    .col(
                        string_len(Plans::BillingInterval, 20)
                            .check(Expr::col(Plans::BillingInterval).is_in(["monthly", "yearly"])),
                    )
                    .col(boolean(Plans::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Plans::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Plans::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Plans {
    Table,
    Id,
    Name,
    Description,
    PriceCents,
    Currency,
    BillingInterval,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
