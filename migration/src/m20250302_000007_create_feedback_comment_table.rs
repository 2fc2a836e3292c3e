use sea_orm_migration::{prelude::*, schema::*};

use crate::uuid_pk;

use super::{
    m20250301_000002_create_user_table::Users, m20250301_000004_create_service_table::Services,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeedbackComments::Table)
                    .if_not_exists()
                    .col(uuid_pk(manager, FeedbackComments::Id))
                    .col(uuid(FeedbackComments::ServiceId))
                    .col(uuid(FeedbackComments::UserId))
                    .col(
                        small_integer(FeedbackComments::Rating)
                            .check(Expr::col(FeedbackComments::Rating).between(1, 5)),
                    )
                    .col(text(FeedbackComments::Body))
                    .col(
                        timestamp_with_time_zone(FeedbackComments::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(FeedbackComments::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_comments_service_id")
                            .from(FeedbackComments::Table, FeedbackComments::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_comments_user_id")
                            .from(FeedbackComments::Table, FeedbackComments::UserId)
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
                    .name("uq_feedback_comments_service_user")
                    .table(FeedbackComments::Table)
                    .col(FeedbackComments::ServiceId)
                    .col(FeedbackComments::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeedbackComments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeedbackComments {
    Table,
    Id,
    ServiceId,
    UserId,
    Rating,
    Body,
    CreatedAt,
    UpdatedAt,
}
