use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::comment::{CreateFeedbackParams, Feedback};

pub struct FeedbackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeedbackRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review; a second review of the same service by the same user violates
    /// the `(service_id, user_id)` unique index.
    pub async fn create(&self, params: CreateFeedbackParams) -> Result<Feedback, DbErr> {
        let now = Utc::now();
        let entity = entity::feedback_comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            service_id: ActiveValue::Set(params.service_id),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            body: ActiveValue::Set(params.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Feedback::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Feedback>, DbErr> {
        let entity = entity::prelude::FeedbackComment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Feedback::from_entity))
    }

    pub async fn exists_for(&self, service_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::FeedbackComment::find()
            .filter(entity::feedback_comment::Column::ServiceId.eq(service_id))
            .filter(entity::feedback_comment::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_by_service_paginated(
        &self,
        service_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Feedback>, u64), DbErr> {
        let paginator = entity::prelude::FeedbackComment::find()
            .filter(entity::feedback_comment::Column::ServiceId.eq(service_id))
            .order_by_desc(entity::feedback_comment::Column::CreatedAt)
            .order_by_asc(entity::feedback_comment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((entities.into_iter().map(Feedback::from_entity).collect(), total))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::FeedbackComment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
