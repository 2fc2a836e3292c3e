use super::*;

/// Tests changing an opening's status and filtering by it.
///
/// Expected: the closed opening only appears under the closed filter
#[tokio::test]
async fn filters_by_status_after_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_partnership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, opening) = factory::helpers::create_opening_with_owner(db).await?;
    factory::create_opening(db, owner.id).await?;

    let repo = OpeningRepository::new(db);
    let closed = repo
        .set_status(opening.id, OpeningStatus::Closed)
        .await?
        .unwrap();
    assert_eq!(closed.status, OpeningStatus::Closed);

    let (open, open_total) = repo.get_paginated(Some(OpeningStatus::Open), 0, 10).await?;
    assert_eq!(open_total, 1);
    assert_ne!(open[0].id, opening.id);

    let (_, all_total) = repo.get_paginated(None, 0, 10).await?;
    assert_eq!(all_total, 2);

    Ok(())
}
