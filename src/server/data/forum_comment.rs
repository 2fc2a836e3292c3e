use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::comment::{CreateForumCommentParams, ForumComment};

pub struct ForumCommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ForumCommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateForumCommentParams) -> Result<ForumComment, DbErr> {
        let now = Utc::now();
        let entity = entity::forum_comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            parent_id: ActiveValue::Set(params.parent_id),
            topic: ActiveValue::Set(params.topic),
            body: ActiveValue::Set(params.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(ForumComment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ForumComment>, DbErr> {
        let entity = entity::prelude::ForumComment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ForumComment::from_entity))
    }

    /// Lists top-level posts newest first, optionally within one topic.
    pub async fn get_top_level_paginated(
        &self,
        topic: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ForumComment>, u64), DbErr> {
        let mut query = entity::prelude::ForumComment::find()
            .filter(entity::forum_comment::Column::ParentId.is_null());
        if let Some(topic) = topic {
            query = query.filter(entity::forum_comment::Column::Topic.eq(topic));
        }

        let paginator = query
            .order_by_desc(entity::forum_comment::Column::CreatedAt)
            .order_by_asc(entity::forum_comment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((
            entities.into_iter().map(ForumComment::from_entity).collect(),
            total,
        ))
    }

    /// Lists direct replies to a post, oldest first.
    pub async fn get_replies_paginated(
        &self,
        parent_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ForumComment>, u64), DbErr> {
        let paginator = entity::prelude::ForumComment::find()
            .filter(entity::forum_comment::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::forum_comment::Column::CreatedAt)
            .order_by_asc(entity::forum_comment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((
            entities.into_iter().map(ForumComment::from_entity).collect(),
            total,
        ))
    }

    /// Deletes a post together with its replies (cascade).
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::ForumComment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
