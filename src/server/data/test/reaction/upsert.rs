use super::*;

/// Tests that reacting twice replaces the kind instead of adding a row.
///
/// Expected: first call creates, second updates the same reaction
#[tokio::test]
async fn replaces_existing_reaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, service) = factory::helpers::create_service_with_owner(db).await?;
    let fan = factory::create_user(db).await?;

    let repo = ReactionRepository::new(db);
    let (first, created) = repo
        .upsert(fan.id, ReactionTarget::Service, service.id, ReactionKind::Like)
        .await?;
    assert!(created);

    let (second, created) = repo
        .upsert(fan.id, ReactionTarget::Service, service.id, ReactionKind::Love)
        .await?;
    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(second.kind, ReactionKind::Love);

    Ok(())
}

/// Tests removing a reaction.
///
/// Expected: true the first time, false once nothing is left
#[tokio::test]
async fn deletes_own_reaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, service) = factory::helpers::create_service_with_owner(db).await?;
    let fan = factory::create_user(db).await?;
    factory::create_reaction(db, fan.id, ReactionTarget::Service, service.id, ReactionKind::Sad)
        .await?;

    let repo = ReactionRepository::new(db);
    assert!(
        repo.delete_by_user_and_target(fan.id, ReactionTarget::Service, service.id)
            .await?
    );
    assert!(
        !repo
            .delete_by_user_and_target(fan.id, ReactionTarget::Service, service.id)
            .await?
    );

    Ok(())
}
