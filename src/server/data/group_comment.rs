use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::comment::{CreateGroupCommentParams, GroupComment};

pub struct GroupCommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupCommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGroupCommentParams) -> Result<GroupComment, DbErr> {
        let now = Utc::now();
        let entity = entity::group_comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            group_id: ActiveValue::Set(params.group_id),
            user_id: ActiveValue::Set(params.user_id),
            parent_id: ActiveValue::Set(params.parent_id),
            body: ActiveValue::Set(params.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(GroupComment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<GroupComment>, DbErr> {
        let entity = entity::prelude::GroupComment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(GroupComment::from_entity))
    }

    /// Lists a group's comments oldest first so threads read top to bottom.
    pub async fn get_by_group_paginated(
        &self,
        group_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<GroupComment>, u64), DbErr> {
        let paginator = entity::prelude::GroupComment::find()
            .filter(entity::group_comment::Column::GroupId.eq(group_id))
            .order_by_asc(entity::group_comment::Column::CreatedAt)
            .order_by_asc(entity::group_comment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((
            entities.into_iter().map(GroupComment::from_entity).collect(),
            total,
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::GroupComment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
