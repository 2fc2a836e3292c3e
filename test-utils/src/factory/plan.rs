//! Plan factory for creating subscription plans.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::BillingInterval;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test plans.
///
/// Defaults to an active monthly plan named `"Plan {id}"` priced at 999 USD cents.
pub struct PlanFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price_cents: i64,
    billing_interval: BillingInterval,
    is_active: bool,
}

impl<'a> PlanFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Plan {}", next_id()),
            price_cents: 999,
            billing_interval: BillingInterval::Monthly,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn billing_interval(mut self, billing_interval: BillingInterval) -> Self {
        self.billing_interval = billing_interval;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::plan::Model, DbErr> {
        let now = Utc::now();
        entity::plan::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            price_cents: ActiveValue::Set(self.price_cents),
            currency: ActiveValue::Set("USD".to_string()),
            billing_interval: ActiveValue::Set(self.billing_interval),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_plan(db: &DatabaseConnection) -> Result<entity::plan::Model, DbErr> {
    PlanFactory::new(db).build().await
}
