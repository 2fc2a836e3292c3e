//! Partnership application repository.

use chrono::Utc;
use entity::sea_orm_active_enums::PartnershipStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::opening::{ApplyPartnershipParams, Partnership};

pub struct PartnershipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartnershipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending application.
    pub async fn create(&self, params: ApplyPartnershipParams) -> Result<Partnership, DbErr> {
        let now = Utc::now();
        let entity = entity::partnership::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            opening_id: ActiveValue::Set(params.opening_id),
            user_id: ActiveValue::Set(params.user_id),
            partnership_group_id: ActiveValue::Set(None),
            message: ActiveValue::Set(params.message),
            status: ActiveValue::Set(PartnershipStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Partnership::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Partnership>, DbErr> {
        let entity = entity::prelude::Partnership::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Partnership::from_entity))
    }

    /// Whether the user has a pending or accepted application to the opening.
    pub async fn has_live(&self, opening_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Partnership::find()
            .filter(entity::partnership::Column::OpeningId.eq(opening_id))
            .filter(entity::partnership::Column::UserId.eq(user_id))
            .filter(entity::partnership::Column::Status.is_in([
                PartnershipStatus::Pending,
                PartnershipStatus::Accepted,
            ]))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_accepted(&self, opening_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Partnership::find()
            .filter(entity::partnership::Column::OpeningId.eq(opening_id))
            .filter(entity::partnership::Column::Status.eq(PartnershipStatus::Accepted))
            .count(self.db)
            .await
    }

    /// Lists applications to an opening oldest first.
    pub async fn get_by_opening_paginated(
        &self,
        opening_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Partnership>, u64), DbErr> {
        let paginator = entity::prelude::Partnership::find()
            .filter(entity::partnership::Column::OpeningId.eq(opening_id))
            .order_by_asc(entity::partnership::Column::CreatedAt)
            .order_by_asc(entity::partnership::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((
            entities.into_iter().map(Partnership::from_entity).collect(),
            total,
        ))
    }

    /// Changes the status, assigning a partnership group when one is given.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: PartnershipStatus,
        partnership_group_id: Option<Uuid>,
    ) -> Result<Option<Partnership>, DbErr> {
        let Some(partnership) = entity::prelude::Partnership::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::partnership::ActiveModel = partnership.into();
        active_model.status = ActiveValue::Set(status);
        if partnership_group_id.is_some() {
            active_model.partnership_group_id = ActiveValue::Set(partnership_group_id);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Partnership::from_entity(entity)))
    }
}
