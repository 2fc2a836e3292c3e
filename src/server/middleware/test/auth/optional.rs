use super::*;

/// Tests the optional guard for anonymous and logged-in callers.
///
/// Expected: None without a session user, Some(User) after login
#[tokio::test]
async fn yields_none_for_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let guard = AuthGuard::new(db, session);

    assert!(guard.optional().await?.is_none());

    let user = factory::create_user(db).await?;
    AuthSession::new(session).login(user.id).await?;

    assert_eq!(guard.optional().await?.map(|user| user.id), Some(user.id));

    Ok(())
}

/// Tests the optional guard with a suspended user.
///
/// Expected: Err(AccountInactive) rather than an anonymous None
#[tokio::test]
async fn still_rejects_inactive_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = test_utils::factory::user::UserFactory::new(db)
        .status(UserStatus::Deactivated)
        .build()
        .await?;

    AuthSession::new(session).login(user.id).await?;

    let result = AuthGuard::new(db, session).optional().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive(_)))
    ));

    Ok(())
}
