use super::*;
use entity::sea_orm_active_enums::{UserRole, UserStatus};

/// Tests creating a user.
///
/// Verifies that new users start active with the `user` role, nothing verified, and an
/// email stored lower-cased.
///
/// Expected: Ok with defaults applied
#[tokio::test]
async fn creates_active_user_with_lowercased_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada", "Ada@Example.COM")).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.status, UserStatus::Active);
    assert!(!user.email_verified);
    assert!(!user.kyc_verified);
    assert!(user.plan_id.is_none());

    Ok(())
}

/// Tests the unique constraint on username.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("ada", "ada@example.com")).await?;
    let result = repo.create(params("ada", "other@example.com")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the existence helpers used by registration.
///
/// Expected: email lookup is case-insensitive, username lookup is exact
#[tokio::test]
async fn reports_existing_email_and_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("ada", "ada@example.com")).await?;

    assert!(repo.email_exists("ADA@example.com").await?);
    assert!(repo.username_exists("ada").await?);
    assert!(!repo.username_exists("grace").await?);

    Ok(())
}
