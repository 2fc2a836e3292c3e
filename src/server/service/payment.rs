//! Plan subscriptions and service purchases.
//!
//! No provider is integrated: payments are created `pending` and an admin records the
//! provider's outcome.

use entity::sea_orm_active_enums::{NotificationKind, PaymentStatus, ServiceStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        payment::PaymentRepository, plan::PlanRepository, service::ServiceRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        payment::{CreatePaymentParams, Payment},
        user::User,
    },
    service::notification::notify,
    util::pagination::Paginated,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a payment for exactly one plan or one published service. The amount and
    /// currency come from the plan or service.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The pending payment
    /// - `Err(AppError::BadRequest)` - Neither or both targets, inactive plan, free item,
    ///   or the buyer's own service
    /// - `Err(AppError::NotFound)` - Unknown plan or service
    pub async fn create(
        &self,
        user: &User,
        plan_id: Option<Uuid>,
        service_id: Option<Uuid>,
        provider: String,
    ) -> Result<Payment, AppError> {
        let (amount_cents, currency) = match (plan_id, service_id) {
            (Some(plan_id), None) => {
                let plan = PlanRepository::new(self.db)
                    .find_by_id(plan_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))?;
                if !plan.is_active {
                    return Err(AppError::BadRequest("Plan is not available".to_string()));
                }
                (plan.price_cents, plan.currency)
            }
            (None, Some(service_id)) => {
                let service = ServiceRepository::new(self.db)
                    .find_by_id(service_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
                if service.status != ServiceStatus::Published {
                    return Err(AppError::BadRequest("Service is not available".to_string()));
                }
                if service.user_id == user.id {
                    return Err(AppError::BadRequest(
                        "You cannot pay for your own service".to_string(),
                    ));
                }
                (service.price_cents, service.currency)
            }
            _ => {
                return Err(AppError::BadRequest(
                    "Exactly one of plan_id or service_id is required".to_string(),
                ))
            }
        };

        if amount_cents <= 0 {
            return Err(AppError::BadRequest("Free items need no payment".to_string()));
        }

        let payment = PaymentRepository::new(self.db)
            .create(CreatePaymentParams {
                user_id: user.id,
                plan_id,
                service_id,
                amount_cents,
                currency,
                provider,
            })
            .await?;

        tracing::info!(
            payment_id = %payment.id,
            user_id = %user.id,
            "Created payment {}",
            payment.provider_reference
        );

        Ok(payment)
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Payment>, AppError> {
        let (payments, total) = PaymentRepository::new(self.db)
            .get_by_user_paginated(user_id, page, per_page)
            .await?;

        Ok(Paginated::new(payments, total, page, per_page))
    }

    /// Moves a payment to its next status.
    ///
    /// A succeeded plan payment puts the user on that plan and a refunded one takes them
    /// off it again, in the same transaction as the status change. The payer is notified.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The updated payment
    /// - `Err(AppError::BadRequest)` - Transition not allowed
    pub async fn set_status(
        &self,
        actor: &User,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<Payment, AppError> {
        let txn = self.db.begin().await?;
        let repo = PaymentRepository::new(&txn);

        let payment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;
        if !payment.can_transition_to(status) {
            return Err(AppError::BadRequest(format!(
                "Cannot change payment from {:?} to {:?}",
                payment.status, status
            )));
        }

        let payment = repo
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if let Some(plan_id) = payment.plan_id {
            let users = UserRepository::new(&txn);
            match status {
                PaymentStatus::Succeeded => {
                    users.set_plan(payment.user_id, Some(plan_id)).await?;
                }
                PaymentStatus::Refunded => {
                    let on_plan = users
                        .find_by_id(payment.user_id)
                        .await?
                        .is_some_and(|user| user.plan_id == Some(plan_id));
                    if on_plan {
                        users.set_plan(payment.user_id, None).await?;
                    }
                }
                PaymentStatus::Pending | PaymentStatus::Failed => {}
            }
        }

        let outcome = match status {
            PaymentStatus::Pending => "is pending",
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "was refunded",
        };
        notify(
            &txn,
            payment.user_id,
            actor.id,
            NotificationKind::Payment,
            format!("Payment {} {}", payment.provider_reference, outcome),
            None,
        )
        .await?;
        txn.commit().await?;

        tracing::info!(payment_id = %payment.id, "Payment moved to {:?}", status);

        Ok(payment)
    }
}
