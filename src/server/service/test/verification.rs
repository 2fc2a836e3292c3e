use super::*;
use crate::server::{
    data::verification::VerificationRepository, service::verification::VerificationService,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::VerificationChannel;
use test_utils::factory::{user::UserFactory, verification::VerificationFactory};

/// Tests issuing and confirming an email code.
///
/// Verifies that reissuing replaces the pending code and that confirming flips the
/// user's flag.
///
/// Expected: 6-digit code, email_verified after confirmation
#[tokio::test]
async fn issues_and_confirms_email_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = user(db).await?;
    let service = VerificationService::new(db);

    service.issue(&member, VerificationChannel::Email).await?;
    let verification = service.issue(&member, VerificationChannel::Email).await?;
    assert_eq!(verification.code.len(), 6);
    assert!(verification.code.chars().all(|c| c.is_ascii_digit()));

    let pending = VerificationRepository::new(db)
        .find_pending(member.id, VerificationChannel::Email)
        .await?
        .unwrap();
    assert_eq!(pending.id, verification.id);

    let verified = service
        .confirm(&member, VerificationChannel::Email, &verification.code)
        .await?;
    assert!(verified.email_verified);
    assert!(!verified.phone_verified);

    Ok(())
}

/// Tests rejected confirmations.
///
/// Expected: BadRequest for a wrong code, an expired code and no pending code
#[tokio::test]
async fn rejects_wrong_and_expired_codes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = user(db).await?;
    let service = VerificationService::new(db);

    VerificationFactory::new(db, member.id)
        .code("123456")
        .build()
        .await?;
    let result = service
        .confirm(&member, VerificationChannel::Email, "654321")
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .confirm(&member, VerificationChannel::Phone, "123456")
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let other = user(db).await?;
    VerificationFactory::new(db, other.id)
        .code("111111")
        .expires_at(Utc::now() - Duration::minutes(1))
        .build()
        .await?;
    let result = service
        .confirm(&other, VerificationChannel::Email, "111111")
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the phone channel.
///
/// Expected: BadRequest without a phone number, Ok with one
#[tokio::test]
async fn phone_channel_requires_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let without_phone = user(db).await?;
    let with_phone = User::from_entity(UserFactory::new(db).phone("+15550100").build().await?);
    let service = VerificationService::new(db);

    let result = service.issue(&without_phone, VerificationChannel::Phone).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service.issue(&with_phone, VerificationChannel::Phone).await?;

    Ok(())
}

/// Tests purging expired codes.
///
/// Expected: only the expired code is removed
#[tokio::test]
async fn purges_expired_codes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = user(db).await?;

    VerificationFactory::new(db, member.id)
        .expires_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    VerificationFactory::new(db, member.id)
        .channel(VerificationChannel::Phone)
        .build()
        .await?;

    assert_eq!(VerificationService::new(db).purge_expired().await?, 1);

    Ok(())
}
