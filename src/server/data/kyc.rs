//! KYC application repository.

use chrono::Utc;
use entity::sea_orm_active_enums::KycStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::kyc::{KycApplication, ReviewKycParams, SubmitKycParams};

pub struct KycRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> KycRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SubmitKycParams) -> Result<KycApplication, DbErr> {
        let now = Utc::now();
        let entity = entity::kyc_application::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            full_name: ActiveValue::Set(params.full_name),
            document_type: ActiveValue::Set(params.document_type),
            document_number: ActiveValue::Set(params.document_number),
            document_front: ActiveValue::Set(params.document_front),
            document_back: ActiveValue::Set(params.document_back),
            selfie: ActiveValue::Set(params.selfie),
            status: ActiveValue::Set(KycStatus::Pending),
            reviewer_id: ActiveValue::Set(None),
            rejection_reason: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(KycApplication::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<KycApplication>, DbErr> {
        let entity = entity::prelude::KycApplication::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(KycApplication::from_entity))
    }

    pub async fn has_pending(&self, user_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::KycApplication::find()
            .filter(entity::kyc_application::Column::UserId.eq(user_id))
            .filter(entity::kyc_application::Column::Status.eq(KycStatus::Pending))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// The user's most recent application, whatever its status.
    pub async fn find_latest_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<KycApplication>, DbErr> {
        let entity = entity::prelude::KycApplication::find()
            .filter(entity::kyc_application::Column::UserId.eq(user_id))
            .order_by_desc(entity::kyc_application::Column::CreatedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(KycApplication::from_entity))
    }

    /// Lists pending applications oldest first.
    pub async fn get_pending_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<KycApplication>, u64), DbErr> {
        let paginator = entity::prelude::KycApplication::find()
            .filter(entity::kyc_application::Column::Status.eq(KycStatus::Pending))
            .order_by_asc(entity::kyc_application::Column::CreatedAt)
            .order_by_asc(entity::kyc_application::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((
            entities.into_iter().map(KycApplication::from_entity).collect(),
            total,
        ))
    }

    /// Records the review outcome and reviewer.
    pub async fn review(
        &self,
        id: Uuid,
        params: ReviewKycParams,
    ) -> Result<Option<KycApplication>, DbErr> {
        let Some(application) = entity::prelude::KycApplication::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active_model: entity::kyc_application::ActiveModel = application.into();
        active_model.status = ActiveValue::Set(params.status);
        active_model.reviewer_id = ActiveValue::Set(Some(params.reviewer_id));
        active_model.rejection_reason = ActiveValue::Set(params.rejection_reason);
        active_model.reviewed_at = ActiveValue::Set(Some(now));
        active_model.updated_at = ActiveValue::Set(now);

        let entity = active_model.update(self.db).await?;

        Ok(Some(KycApplication::from_entity(entity)))
    }
}
