use super::*;
use test_utils::factory::verification::VerificationFactory;

/// Tests that confirmed codes are not treated as pending.
///
/// Expected: Ok(None) once the only code is confirmed
#[tokio::test]
async fn ignores_confirmed_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let code = factory::create_verification(db, user.id).await?;

    let repo = VerificationRepository::new(db);
    let pending = repo
        .find_pending(user.id, VerificationChannel::Email)
        .await?
        .unwrap();
    assert_eq!(pending.id, code.id);

    repo.mark_verified(code.id, Utc::now()).await?;
    assert!(repo
        .find_pending(user.id, VerificationChannel::Email)
        .await?
        .is_none());

    Ok(())
}

/// Tests that deleting pending codes leaves the other channel alone.
///
/// Expected: only the email code is removed
#[tokio::test]
async fn delete_pending_is_per_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_verification(db, user.id).await?;
    VerificationFactory::new(db, user.id)
        .channel(VerificationChannel::Phone)
        .build()
        .await?;

    let repo = VerificationRepository::new(db);
    let removed = repo
        .delete_pending(user.id, VerificationChannel::Email)
        .await?;

    assert_eq!(removed, 1);
    assert!(repo
        .find_pending(user.id, VerificationChannel::Phone)
        .await?
        .is_some());

    Ok(())
}
