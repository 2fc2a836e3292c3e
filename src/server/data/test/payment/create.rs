use super::*;

/// Tests creating payments.
///
/// Verifies that payments start pending and each receives a distinct provider reference.
///
/// Expected: Ok with pending status and unique references
#[tokio::test]
async fn creates_pending_payment_with_unique_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let plan = factory::create_plan(db).await?;

    let repo = PaymentRepository::new(db);
    let make = || CreatePaymentParams {
        user_id: user.id,
        plan_id: Some(plan.id),
        service_id: None,
        amount_cents: plan.price_cents,
        currency: plan.currency.clone(),
        provider: "manual".to_string(),
    };
    let first = repo.create(make()).await?;
    let second = repo.create(make()).await?;

    assert_eq!(first.status, PaymentStatus::Pending);
    assert!(first.provider_reference.starts_with("pay_"));
    assert_ne!(first.provider_reference, second.provider_reference);

    let (payments, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;
    assert_eq!(total, 2);
    assert!(payments.iter().all(|payment| payment.user_id == user.id));

    Ok(())
}

/// Tests that a user with payments cannot be deleted.
///
/// Expected: Err from the restricting foreign key
#[tokio::test]
async fn payments_restrict_user_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let plan = factory::create_plan(db).await?;
    factory::create_plan_payment(db, user.id, plan.id).await?;

    let result = crate::server::data::user::UserRepository::new(db)
        .delete(user.id)
        .await;

    assert!(result.is_err());

    Ok(())
}
