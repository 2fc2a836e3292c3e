use super::*;

/// Tests creating a service inside a group.
///
/// Expected: Ok with slug from the title and the group attached
#[tokio::test]
async fn creates_service_in_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, group) = factory::helpers::create_group_with_owner(db).await?;

    let repo = ServiceRepository::new(db);
    let service = repo
        .create(CreateServiceParams {
            group_id: Some(group.id),
            ..params(owner.id, "Logo Design", ServiceStatus::Published)
        })
        .await?;

    assert_eq!(service.slug, "logo-design");
    assert_eq!(service.group_id, Some(group.id));
    assert!(service.media.is_none());

    Ok(())
}

/// Tests that deleting the group detaches its services instead of deleting them.
///
/// Expected: service survives with `group_id` cleared
#[tokio::test]
async fn group_delete_sets_group_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, group) = factory::helpers::create_group_with_owner(db).await?;

    let repo = ServiceRepository::new(db);
    let service = repo
        .create(CreateServiceParams {
            group_id: Some(group.id),
            ..params(owner.id, "Tutoring", ServiceStatus::Published)
        })
        .await?;

    crate::server::data::group::GroupRepository::new(db)
        .delete(group.id)
        .await?;

    let reloaded = repo.find_by_id(service.id).await?.unwrap();
    assert!(reloaded.group_id.is_none());

    Ok(())
}
