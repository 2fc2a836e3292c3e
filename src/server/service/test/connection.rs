use super::*;
use crate::server::{error::auth::AuthError, service::connection::ConnectionService};
use entity::sea_orm_active_enums::ConnectionStatus;

/// Tests connection request guards.
///
/// Expected: BadRequest for yourself, Conflict for a reverse duplicate
#[tokio::test]
async fn rejects_self_and_duplicate_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = user(db).await?;
    let bob = user(db).await?;
    let service = ConnectionService::new(db);

    let result = service.request(&alice, alice.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service.request(&alice, bob.id).await?;
    assert_eq!(notification_count(db, bob.id).await?, 1);

    let result = service.request(&bob, alice.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests answering a request.
///
/// Verifies that only the addressee may answer and that acceptance notifies the
/// requester.
///
/// Expected: AccessDenied for the requester, Accepted for the addressee
#[tokio::test]
async fn only_addressee_responds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = user(db).await?;
    let bob = user(db).await?;
    let service = ConnectionService::new(db);

    let request = service.request(&alice, bob.id).await?;

    let result = service
        .respond(&alice, request.id, ConnectionStatus::Accepted)
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let accepted = service
        .respond(&bob, request.id, ConnectionStatus::Accepted)
        .await?;
    assert_eq!(accepted.status, ConnectionStatus::Accepted);
    assert_eq!(notification_count(db, alice.id).await?, 1);

    let result = service
        .respond(&bob, request.id, ConnectionStatus::Blocked)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting a connection.
///
/// Expected: NotFound for an outsider, Ok for either side
#[tokio::test]
async fn either_side_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = user(db).await?;
    let bob = user(db).await?;
    let eve = user(db).await?;
    let service = ConnectionService::new(db);

    let request = service.request(&alice, bob.id).await?;

    let result = service.delete(&eve, request.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    service.delete(&bob, request.id).await?;
    service.request(&bob, alice.id).await?;

    Ok(())
}
