use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a user cascades to the groups they own.
///
/// Expected: Ok(true) and no groups left
#[tokio::test]
async fn cascades_to_owned_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _group) = factory::helpers::create_group_with_owner(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(owner.id).await?);

    let groups = entity::prelude::Group::find().count(db).await?;
    assert_eq!(groups, 0);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.delete(uuid::Uuid::new_v4()).await?);

    Ok(())
}
