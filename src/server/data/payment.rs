use chrono::Utc;
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::payment::{CreatePaymentParams, Payment};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending payment with a freshly generated provider reference.
    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let entity = entity::payment::ActiveModel {
            id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(params.user_id),
            plan_id: ActiveValue::Set(params.plan_id),
            service_id: ActiveValue::Set(params.service_id),
            amount_cents: ActiveValue::Set(params.amount_cents),
            currency: ActiveValue::Set(params.currency),
            provider: ActiveValue::Set(params.provider),
            provider_reference: ActiveValue::Set(format!("pay_{}", id.simple())),
            status: ActiveValue::Set(PaymentStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::Payment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Payment::from_entity))
    }

    pub async fn get_by_user_paginated(
        &self,
        user_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Payment>, u64), DbErr> {
        let paginator = entity::prelude::Payment::find()
            .filter(entity::payment::Column::UserId.eq(user_id))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_asc(entity::payment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((entities.into_iter().map(Payment::from_entity).collect(), total))
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<Option<Payment>, DbErr> {
        let Some(payment) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::payment::ActiveModel = payment.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Payment::from_entity(entity)))
    }
}
