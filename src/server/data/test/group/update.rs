use super::*;

/// Tests that renaming a group re-derives its slug.
///
/// Expected: Ok(Some) with the new slug
#[tokio::test]
async fn renaming_updates_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo.create(params(owner.id, "Old Name", GroupPrivacy::Public)).await?;

    let updated = repo
        .update(
            group.id,
            UpdateGroupParams {
                name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.slug, "new-name");

    Ok(())
}

/// Tests that saving a group under its current name keeps its slug.
///
/// Verifies the group does not collide with itself and pick up a `-2` suffix.
///
/// Expected: Ok(Some) with the slug unchanged
#[tokio::test]
async fn same_name_keeps_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo.create(params(owner.id, "Knitters", GroupPrivacy::Public)).await?;

    let updated = repo
        .update(
            group.id,
            UpdateGroupParams {
                name: Some("Knitters".to_string()),
                privacy: Some(GroupPrivacy::Private),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.slug, "knitters");
    assert_eq!(updated.privacy, GroupPrivacy::Private);

    Ok(())
}
