use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::plan::{CreatePlanParams, Plan, UpdatePlanParams};

pub struct PlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, DbErr> {
        let now = Utc::now();
        let entity = entity::plan::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price_cents: ActiveValue::Set(params.price_cents),
            currency: ActiveValue::Set(params.currency),
            billing_interval: ActiveValue::Set(params.billing_interval),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Plan::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Plan>, DbErr> {
        let entity = entity::prelude::Plan::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Plan::from_entity))
    }

    /// Checks whether another plan already uses `name`.
    pub async fn name_exists(&self, name: &str, exclude_id: Option<Uuid>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Plan::find().filter(entity::plan::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::plan::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Lists plans ordered by price, cheapest first.
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Plan>, DbErr> {
        let mut query = entity::prelude::Plan::find();
        if active_only {
            query = query.filter(entity::plan::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_asc(entity::plan::Column::PriceCents)
            .order_by_asc(entity::plan::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Plan::from_entity).collect())
    }

    pub async fn update(&self, id: Uuid, params: UpdatePlanParams) -> Result<Option<Plan>, DbErr> {
        let Some(plan) = entity::prelude::Plan::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::plan::ActiveModel = plan.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(price_cents) = params.price_cents {
            active_model.price_cents = ActiveValue::Set(price_cents);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Plan::from_entity(entity)))
    }
}
