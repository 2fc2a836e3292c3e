use super::*;

/// Tests that changing the phone number clears its verification.
///
/// Expected: Ok(Some) with the new phone and `phone_verified` false
#[tokio::test]
async fn phone_change_resets_verification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada", "ada@example.com")).await?;
    repo.mark_verified(user.id, entity::sea_orm_active_enums::VerificationChannel::Phone)
        .await?;

    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                phone: Some("+15550100".to_string()),
                bio: Some("Collector".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.phone.as_deref(), Some("+15550100"));
    assert_eq!(updated.bio.as_deref(), Some("Collector"));
    assert!(!updated.phone_verified);
    assert_eq!(updated.first_name, "Ada");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(uuid::Uuid::new_v4(), UpdateProfileParams::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
