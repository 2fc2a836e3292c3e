use super::*;

/// Tests that the slug is derived from the group name.
///
/// Expected: Ok with slug "rust-makers-club"
#[tokio::test]
async fn derives_slug_from_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo
        .create(params(owner.id, "Rust  Makers' Club!", GroupPrivacy::Public))
        .await?;

    assert_eq!(group.slug, "rust-makers-club");
    assert_eq!(group.name, "Rust  Makers' Club!");

    Ok(())
}

/// Tests slug collision handling.
///
/// Verifies that groups whose names slugify to the same base get `-2`, `-3` suffixes.
///
/// Expected: Ok with "bakers", "bakers-2", "bakers-3"
#[tokio::test]
async fn suffixes_colliding_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let first = repo.create(params(owner.id, "Bakers", GroupPrivacy::Public)).await?;
    let second = repo.create(params(owner.id, "bakers", GroupPrivacy::Public)).await?;
    let third = repo.create(params(owner.id, "BAKERS!", GroupPrivacy::Private)).await?;

    assert_eq!(first.slug, "bakers");
    assert_eq!(second.slug, "bakers-2");
    assert_eq!(third.slug, "bakers-3");

    let found = repo.find_by_slug("bakers-2").await?.unwrap();
    assert_eq!(found.id, second.id);

    Ok(())
}

/// Tests that a group cannot reference a missing owner.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_for_missing_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let result = repo
        .create(params(Uuid::new_v4(), "Orphans", GroupPrivacy::Public))
        .await;

    assert!(result.is_err());

    Ok(())
}
