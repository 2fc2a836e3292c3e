use super::*;

/// Tests replacing a user's interests.
///
/// Expected: the old set is gone and the new one is returned alphabetically
#[tokio::test]
async fn replaces_previous_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = InterestRepository::new(db);
    repo.replace(user.id, &["hiking".to_string(), "baking".to_string()])
        .await?;
    repo.replace(user.id, &["travel".to_string(), "cooking".to_string()])
        .await?;

    let interests = repo.get_by_user(user.id).await?;
    assert_eq!(interests, vec!["cooking".to_string(), "travel".to_string()]);

    Ok(())
}

/// Tests clearing interests with an empty set.
///
/// Expected: no interests left
#[tokio::test]
async fn empty_set_clears_interests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = InterestRepository::new(db);
    repo.replace(user.id, &["hiking".to_string()]).await?;
    repo.replace(user.id, &[]).await?;

    assert!(repo.get_by_user(user.id).await?.is_empty());

    Ok(())
}
