use super::*;
use test_utils::factory::verification::VerificationFactory;

/// Tests the purge of expired codes.
///
/// Verifies that only unconfirmed codes past their expiry are removed; confirmed codes
/// stay as history even when old.
///
/// Expected: Ok(1)
#[tokio::test]
async fn removes_only_expired_unconfirmed_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let stale = factory::create_user(db).await?;
    let fresh = factory::create_user(db).await?;
    let confirmed = factory::create_user(db).await?;

    VerificationFactory::new(db, stale.id)
        .expires_at(now - Duration::minutes(5))
        .build()
        .await?;
    VerificationFactory::new(db, fresh.id)
        .expires_at(now + Duration::minutes(10))
        .build()
        .await?;
    VerificationFactory::new(db, confirmed.id)
        .expires_at(now - Duration::hours(2))
        .verified_at(now - Duration::hours(3))
        .build()
        .await?;

    let repo = VerificationRepository::new(db);
    let removed = repo.delete_expired(now).await?;

    assert_eq!(removed, 1);
    assert!(repo
        .find_pending(fresh.id, VerificationChannel::Email)
        .await?
        .is_some());

    Ok(())
}
