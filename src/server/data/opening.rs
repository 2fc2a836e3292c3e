use chrono::Utc;
use entity::sea_orm_active_enums::OpeningStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::opening::{CreateOpeningParams, Opening};

pub struct OpeningRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OpeningRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateOpeningParams) -> Result<Opening, DbErr> {
        let now = Utc::now();
        let entity = entity::opening::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(params.owner_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            category: ActiveValue::Set(params.category),
            slots: ActiveValue::Set(params.slots),
            status: ActiveValue::Set(OpeningStatus::Open),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Opening::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Opening>, DbErr> {
        let entity = entity::prelude::Opening::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Opening::from_entity))
    }

    pub async fn get_paginated(
        &self,
        status: Option<OpeningStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Opening>, u64), DbErr> {
        let mut query = entity::prelude::Opening::find();
        if let Some(status) = status {
            query = query.filter(entity::opening::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::opening::Column::CreatedAt)
            .order_by_asc(entity::opening::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((entities.into_iter().map(Opening::from_entity).collect(), total))
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: OpeningStatus,
    ) -> Result<Option<Opening>, DbErr> {
        let Some(opening) = entity::prelude::Opening::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::opening::ActiveModel = opening.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Opening::from_entity(entity)))
    }

    /// Deletes an opening together with its groups and applications (cascade).
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Opening::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
