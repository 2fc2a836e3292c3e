use super::*;

/// Tests group visibility for anonymous viewers, owners and admins.
///
/// Expected: anonymous sees public only, the owner also sees their private group, and
/// `include_private` returns everything
#[tokio::test]
async fn filters_private_groups_by_viewer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    repo.create(params(owner.id, "Open Door", GroupPrivacy::Public)).await?;
    repo.create(params(owner.id, "Inner Circle", GroupPrivacy::Private)).await?;
    repo.create(params(other.id, "Their Secret", GroupPrivacy::Private)).await?;

    let (_, anonymous_total) = repo.get_visible_paginated(None, false, 0, 10).await?;
    assert_eq!(anonymous_total, 1);

    let (groups, owner_total) = repo
        .get_visible_paginated(Some(owner.id), false, 0, 10)
        .await?;
    assert_eq!(owner_total, 2);
    assert!(groups.iter().all(|group| group.owner_id == owner.id));

    let (_, admin_total) = repo.get_visible_paginated(None, true, 0, 10).await?;
    assert_eq!(admin_total, 3);

    Ok(())
}
