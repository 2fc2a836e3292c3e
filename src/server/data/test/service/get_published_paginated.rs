use super::*;

/// Tests that listings only include published services.
///
/// Expected: drafts and archived services are excluded
#[tokio::test]
async fn excludes_unpublished_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = ServiceRepository::new(db);
    repo.create(params(owner.id, "Live", ServiceStatus::Published)).await?;
    repo.create(params(owner.id, "Draft", ServiceStatus::Draft)).await?;
    repo.create(params(owner.id, "Old", ServiceStatus::Archived)).await?;

    let (services, total) = repo.get_published_paginated(None, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(services[0].title, "Live");

    Ok(())
}

/// Tests filtering listings by category.
///
/// Expected: only the matching category is returned
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = ServiceRepository::new(db);
    repo.create(params(owner.id, "Quilts", ServiceStatus::Published)).await?;
    repo.create(CreateServiceParams {
        category: "lessons".to_string(),
        ..params(owner.id, "Piano", ServiceStatus::Published)
    })
    .await?;

    let (services, total) = repo.get_published_paginated(Some("lessons"), 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(services[0].title, "Piano");

    Ok(())
}
