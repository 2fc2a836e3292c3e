use super::*;

/// Tests finding a connection regardless of direction.
///
/// Expected: the same connection is found from both sides
#[tokio::test]
async fn finds_connection_in_either_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;
    let connection =
        factory::create_connection(db, alice.id, bob.id, ConnectionStatus::Pending).await?;

    let repo = ConnectionRepository::new(db);
    assert_eq!(
        repo.find_between(alice.id, bob.id).await?.map(|c| c.id),
        Some(connection.id)
    );
    assert_eq!(
        repo.find_between(bob.id, alice.id).await?.map(|c| c.id),
        Some(connection.id)
    );
    assert!(repo.find_between(alice.id, carol.id).await?.is_none());

    Ok(())
}

/// Tests listing a user's connections with a status filter.
///
/// Expected: both sent and received connections, narrowed by status
#[tokio::test]
async fn lists_sent_and_received() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;
    factory::create_connection(db, alice.id, bob.id, ConnectionStatus::Accepted).await?;
    factory::create_connection(db, carol.id, alice.id, ConnectionStatus::Pending).await?;

    let repo = ConnectionRepository::new(db);
    let (_, total) = repo.get_by_user_paginated(alice.id, None, 0, 10).await?;
    assert_eq!(total, 2);

    let (pending, pending_total) = repo
        .get_by_user_paginated(alice.id, Some(ConnectionStatus::Pending), 0, 10)
        .await?;
    assert_eq!(pending_total, 1);
    assert_eq!(pending[0].requester_id, carol.id);

    Ok(())
}
