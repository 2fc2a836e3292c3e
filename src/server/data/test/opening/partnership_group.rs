use super::*;

/// Tests group name uniqueness within one opening.
///
/// Expected: the name is taken for its opening but free for another
#[tokio::test]
async fn names_are_scoped_to_opening() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_partnership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, opening) = factory::helpers::create_opening_with_owner(db).await?;
    let other_opening = factory::create_opening(db, owner.id).await?;

    let repo = PartnershipGroupRepository::new(db);
    repo.create(opening.id, "Team A".to_string()).await?;

    assert!(repo.name_exists(opening.id, "Team A").await?);
    assert!(!repo.name_exists(other_opening.id, "Team A").await?);

    let groups = repo.get_by_opening(opening.id).await?;
    assert_eq!(groups.len(), 1);

    Ok(())
}
