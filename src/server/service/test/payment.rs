use super::*;
use crate::server::{data::user::UserRepository, service::payment::PaymentService};
use entity::sea_orm_active_enums::PaymentStatus;
use test_utils::factory::{payment::PaymentFactory, plan::PlanFactory};

/// Tests the payment target rule.
///
/// Expected: BadRequest for neither or both of plan and service
#[tokio::test]
async fn requires_exactly_one_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let buyer = user(db).await?;
    let plan = factory::create_plan(db).await?;
    let (_, listing) = factory::helpers::create_service_with_owner(db).await?;
    let service = PaymentService::new(db);

    let result = service
        .create(&buyer, None, None, "manual".to_string())
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .create(&buyer, Some(plan.id), Some(listing.id), "manual".to_string())
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let payment = service
        .create(&buyer, None, Some(listing.id), "manual".to_string())
        .await?;
    assert_eq!(payment.amount_cents, listing.price_cents);
    assert_eq!(payment.status, PaymentStatus::Pending);

    Ok(())
}

/// Tests a free plan.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_free_plan() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let buyer = user(db).await?;
    let plan = PlanFactory::new(db).price_cents(0).build().await?;

    let result = PaymentService::new(db)
        .create(&buyer, Some(plan.id), None, "manual".to_string())
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests succeeding and refunding a plan payment.
///
/// Expected: plan set on success and cleared on refund, payer notified each time
#[tokio::test]
async fn success_sets_plan_and_refund_clears_it() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let buyer = user(db).await?;
    let moderator = admin(db).await?;
    let plan = factory::create_plan(db).await?;
    let payment = factory::create_plan_payment(db, buyer.id, plan.id).await?;
    let service = PaymentService::new(db);
    let users = UserRepository::new(db);

    service
        .set_status(&moderator, payment.id, PaymentStatus::Succeeded)
        .await?;
    assert_eq!(users.find_by_id(buyer.id).await?.unwrap().plan_id, Some(plan.id));

    service
        .set_status(&moderator, payment.id, PaymentStatus::Refunded)
        .await?;
    assert_eq!(users.find_by_id(buyer.id).await?.unwrap().plan_id, None);
    assert_eq!(notification_count(db, buyer.id).await?, 2);

    Ok(())
}

/// Tests disallowed transitions.
///
/// Expected: BadRequest for failed → succeeded and pending → refunded
#[tokio::test]
async fn rejects_invalid_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let buyer = user(db).await?;
    let moderator = admin(db).await?;
    let plan = factory::create_plan(db).await?;
    let failed = PaymentFactory::new(db, buyer.id)
        .plan_id(plan.id)
        .status(PaymentStatus::Failed)
        .build()
        .await?;
    let pending = factory::create_plan_payment(db, buyer.id, plan.id).await?;
    let service = PaymentService::new(db);

    let result = service
        .set_status(&moderator, failed.id, PaymentStatus::Succeeded)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .set_status(&moderator, pending.id, PaymentStatus::Refunded)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
