use super::*;

/// Tests that a retitled service avoids another service's slug.
///
/// Expected: Ok(Some) with slug "piano-lessons-2"
#[tokio::test]
async fn retitle_avoids_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = ServiceRepository::new(db);
    repo.create(params(owner.id, "Piano Lessons", ServiceStatus::Published)).await?;
    let other = repo.create(params(owner.id, "Guitar", ServiceStatus::Published)).await?;

    let updated = repo
        .update(
            other.id,
            UpdateServiceParams {
                title: Some("Piano lessons".to_string()),
                price_cents: Some(4000),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.slug, "piano-lessons-2");
    assert_eq!(updated.price_cents, 4000);

    Ok(())
}

/// Tests attaching media to a service.
///
/// Expected: Ok(Some) with the media path stored
#[tokio::test]
async fn sets_media_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, service) = factory::helpers::create_service_with_owner(db).await?;

    let repo = ServiceRepository::new(db);
    let updated = repo
        .set_media(service.id, "/uploads/videos/demo.mp4".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.media.as_deref(), Some("/uploads/videos/demo.mp4"));

    Ok(())
}
