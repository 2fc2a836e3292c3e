use super::*;

/// Tests pagination over users.
///
/// Verifies that the requested page holds at most `per_page` users and that the total
/// counts every user.
///
/// Expected: Ok with correct page of users and total count
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    let (users, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests pagination with an empty table.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
