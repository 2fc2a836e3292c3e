use super::*;

/// Tests per-kind reaction counts.
///
/// Expected: like=2, angry=1, other kinds omitted, other targets ignored
#[tokio::test]
async fn counts_each_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, service) = factory::helpers::create_service_with_owner(db).await?;
    let other_service = factory::create_service(db, owner.id).await?;

    for kind in [ReactionKind::Like, ReactionKind::Like, ReactionKind::Angry] {
        let user = factory::create_user(db).await?;
        factory::create_reaction(db, user.id, ReactionTarget::Service, service.id, kind).await?;
    }
    factory::create_reaction(
        db,
        owner.id,
        ReactionTarget::Service,
        other_service.id,
        ReactionKind::Love,
    )
    .await?;

    let repo = ReactionRepository::new(db);
    let counts = repo
        .count_by_kind(ReactionTarget::Service, service.id)
        .await?;

    assert_eq!(
        counts,
        vec![(ReactionKind::Like, 2), (ReactionKind::Angry, 1)]
    );

    Ok(())
}
