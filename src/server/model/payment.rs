use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PaymentStatus;
use uuid::Uuid;

use crate::model::payment::PaymentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub amount_cents: i64,
    pub currency: String,
    pub provider: String,
    pub provider_reference: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            plan_id: entity.plan_id,
            service_id: entity.service_id,
            amount_cents: entity.amount_cents,
            currency: entity.currency,
            provider: entity.provider,
            provider_reference: entity.provider_reference,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            user_id: self.user_id,
            plan_id: self.plan_id,
            service_id: self.service_id,
            amount_cents: self.amount_cents,
            currency: self.currency,
            provider: self.provider,
            provider_reference: self.provider_reference,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Whether the payment may move from its current status to `next`.
    ///
    /// Pending payments settle as succeeded or failed; only succeeded payments can be
    /// refunded.
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        matches!(
            (self.status, next),
            (PaymentStatus::Pending, PaymentStatus::Succeeded)
                | (PaymentStatus::Pending, PaymentStatus::Failed)
                | (PaymentStatus::Succeeded, PaymentStatus::Refunded)
        )
    }
}

/// What a payment is for, resolved to its price before insert.
#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub user_id: Uuid,
    pub plan_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub amount_cents: i64,
    pub currency: String,
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(status: PaymentStatus) -> Payment {
        let now = Utc::now();
        Payment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            plan_id: Some(Uuid::new_v4()),
            service_id: None,
            amount_cents: 999,
            currency: "USD".to_string(),
            provider: "manual".to_string(),
            provider_reference: "ref".to_string(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn pending_settles_once() {
        let pending = payment(PaymentStatus::Pending);
        assert!(pending.can_transition_to(PaymentStatus::Succeeded));
        assert!(pending.can_transition_to(PaymentStatus::Failed));
        assert!(!pending.can_transition_to(PaymentStatus::Refunded));
    }

    #[test]
    fn only_succeeded_refunds() {
        assert!(payment(PaymentStatus::Succeeded).can_transition_to(PaymentStatus::Refunded));
        assert!(!payment(PaymentStatus::Failed).can_transition_to(PaymentStatus::Refunded));
        assert!(!payment(PaymentStatus::Refunded).can_transition_to(PaymentStatus::Pending));
    }
}
