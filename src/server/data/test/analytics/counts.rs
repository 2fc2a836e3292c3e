use super::*;

fn visit(path: &str) -> RecordPageVisitParams {
    RecordPageVisitParams {
        user_id: None,
        path: path.to_string(),
        referrer: None,
        ip_address: Some("127.0.0.1".to_string()),
        user_agent: None,
    }
}

/// Tests visit counts per path.
///
/// Expected: paths ordered by visit count, most visited first
#[tokio::test]
async fn counts_visits_per_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnalyticsRepository::new(db);
    for path in ["/services", "/forum", "/services", "/services", "/forum", "/groups"] {
        repo.record_page_visit(visit(path)).await?;
    }

    let counts = repo.page_visit_counts(10).await?;

    assert_eq!(
        counts,
        vec![
            ("/services".to_string(), 3),
            ("/forum".to_string(), 2),
            ("/groups".to_string(), 1),
        ]
    );

    Ok(())
}

/// Tests engagement counts per action on one target.
///
/// Expected: view=2, share=1
#[tokio::test]
async fn counts_engagement_per_action() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (viewer, service) = factory::helpers::create_service_with_owner(db).await?;

    let repo = AnalyticsRepository::new(db);
    for action in [
        EngagementAction::View,
        EngagementAction::Share,
        EngagementAction::View,
    ] {
        repo.record_engagement(RecordEngagementParams {
            user_id: viewer.id,
            target_type: EngagementTarget::Service,
            target_id: service.id,
            action,
        })
        .await?;
    }

    let counts = repo
        .engagement_counts(EngagementTarget::Service, service.id)
        .await?;

    assert_eq!(
        counts,
        vec![(EngagementAction::View, 2), (EngagementAction::Share, 1)]
    );

    Ok(())
}
