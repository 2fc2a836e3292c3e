use super::*;
use crate::server::{model::interest::MAX_INTERESTS, service::interest::InterestService};

/// Tests replacing the interest set.
///
/// Expected: names trimmed, lower-cased, deduplicated and returned alphabetically
#[tokio::test]
async fn replaces_with_normalized_set() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = user(db).await?;
    let service = InterestService::new(db);

    service
        .replace(member.id, vec!["Cooking".to_string()])
        .await?;
    let names = service
        .replace(
            member.id,
            vec![" Rust ".to_string(), "rust".to_string(), "Gardening".to_string()],
        )
        .await?;

    assert_eq!(names, vec!["gardening".to_string(), "rust".to_string()]);

    Ok(())
}

/// Tests the interest limit.
///
/// Expected: Err(BadRequest) and the previous set kept
#[tokio::test]
async fn rejects_too_many_interests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = user(db).await?;
    let service = InterestService::new(db);

    service.replace(member.id, vec!["rust".to_string()]).await?;

    let names = (0..=MAX_INTERESTS).map(|i| format!("topic {}", i)).collect();
    let result = service.replace(member.id, names).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    assert_eq!(service.get(member.id).await?, vec!["rust".to_string()]);

    Ok(())
}
