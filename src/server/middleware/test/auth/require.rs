use super::*;
use test_utils::factory::user::UserFactory;

/// Tests a request without a logged-in user.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a logged-in active user without extra permissions.
///
/// Expected: Ok(User) matching the session's user
#[tokio::test]
async fn accepts_active_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    AuthSession::new(session).login(user.id).await?;

    let guarded = AuthGuard::new(db, session).require(&[]).await?;
    assert_eq!(guarded.id, user.id);

    Ok(())
}

/// Tests the admin permission.
///
/// Expected: AccessDenied for a regular user, Ok for an admin
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.login(user.id).await?;
    let result = guard.require(&[Permission::Admin]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    auth_session.login(admin.id).await?;
    let guarded = guard.require(&[Permission::Admin]).await?;
    assert!(guarded.is_admin());

    Ok(())
}

/// Tests a suspended user with a live session.
///
/// Expected: Err(AccountInactive)
#[tokio::test]
async fn rejects_suspended_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = UserFactory::new(db)
        .status(UserStatus::Suspended)
        .build()
        .await?;

    AuthSession::new(session).login(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive(_)))
    ));

    Ok(())
}

/// Tests a session that outlived its user.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .login(uuid::Uuid::new_v4())
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}
