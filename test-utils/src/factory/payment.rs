//! Payment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for payments.
///
/// Defaults to a pending 999 USD cent payment with a unique provider reference and no
/// subject; call `plan_id` or `service_id` to attach one.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    plan_id: Option<Uuid>,
    service_id: Option<Uuid>,
    amount_cents: i64,
    status: PaymentStatus,
}

impl<'a> PaymentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            plan_id: None,
            service_id: None,
            amount_cents: 999,
            status: PaymentStatus::Pending,
        }
    }

    pub fn plan_id(mut self, plan_id: Uuid) -> Self {
        self.plan_id = Some(plan_id);
        self
    }

    pub fn service_id(mut self, service_id: Uuid) -> Self {
        self.service_id = Some(service_id);
        self
    }

    pub fn amount_cents(mut self, amount_cents: i64) -> Self {
        self.amount_cents = amount_cents;
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now();
        entity::payment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            plan_id: ActiveValue::Set(self.plan_id),
            service_id: ActiveValue::Set(self.service_id),
            amount_cents: ActiveValue::Set(self.amount_cents),
            currency: ActiveValue::Set("USD".to_string()),
            provider: ActiveValue::Set("manual".to_string()),
            provider_reference: ActiveValue::Set(format!("ref_{}", next_id())),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending payment for the given plan.
pub async fn create_plan_payment(
    db: &DatabaseConnection,
    user_id: Uuid,
    plan_id: Uuid,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, user_id).plan_id(plan_id).build().await
}
