use super::*;

/// Tests looking up login credentials.
///
/// Expected: Ok(Some) with the stored hash, regardless of email case
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("ada", "ada@example.com")).await?;

    let found = repo.find_credentials_by_email("Ada@Example.com").await?;

    let (user, hash) = found.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(hash, "hash");

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
