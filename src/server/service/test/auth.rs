use super::*;
use crate::server::{
    data::user::UserRepository,
    error::auth::AuthError,
    model::user::RegisterParams,
    service::auth::AuthService,
};
use entity::sea_orm_active_enums::UserStatus;

fn params(username: &str, email: &str) -> RegisterParams {
    RegisterParams {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: "correct horse battery".to_string(),
        phone: None,
    }
}

/// Tests registering and logging in with the same credentials.
///
/// Expected: Ok(User) for the right password, InvalidCredentials for a wrong one
#[tokio::test]
async fn registers_and_logs_in() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let registered = service.register(params("ada", "ada@example.com")).await?;
    let logged_in = service
        .login("ada@example.com", "correct horse battery")
        .await?;
    assert_eq!(logged_in.id, registered.id);

    let result = service.login("ada@example.com", "wrong password").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let result = service.login("nobody@example.com", "correct horse battery").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests duplicate registration.
///
/// Expected: Err(Conflict) for a reused email and for a reused username
#[tokio::test]
async fn rejects_duplicate_email_and_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    service.register(params("ada", "ada@example.com")).await?;

    let result = service.register(params("ada2", "ada@example.com")).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let result = service.register(params("ada", "other@example.com")).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests logging into a suspended account.
///
/// Expected: Err(AccountInactive) even with the right password
#[tokio::test]
async fn rejects_suspended_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let user = service.register(params("ada", "ada@example.com")).await?;
    UserRepository::new(db)
        .set_status(user.id, UserStatus::Suspended)
        .await?;

    let result = service
        .login("ada@example.com", "correct horse battery")
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive(_)))
    ));

    Ok(())
}
