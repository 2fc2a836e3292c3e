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
                    .table(Connections::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, Connections::Id))
                    .col(uuid(Connections::RequesterId))
                    .col(uuid(Connections::AddresseeId))
                    .col(
                        string_len(Connections::Status, 20)
                            .default("pending")
                            .check(Expr::col(Connections::Status).is_in([
                                "pending", "accepted", "declined", "blocked",
                            ])),
                    )
                    .col(
                        timestamp_with_time_zone(Connections::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Connections::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .check((
                        "ck_connections_distinct_users",
                        Expr::col(Connections::RequesterId)
                            .ne(Expr::col(Connections::AddresseeId)),
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connections_requester_id")
                            .from(Connections::Table, Connections::RequesterId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connections_addressee_id")
                            .from(Connections::Table, Connections::AddresseeId)
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
                    .name("uq_connections_pair")
                    .table(Connections::Table)
                    .col(Connections::RequesterId)
                    .col(Connections::AddresseeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Connections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Connections {
    Table,
    Id,
    RequesterId,
    AddresseeId,
    Status,
    CreatedAt,
    UpdatedAt,
}
