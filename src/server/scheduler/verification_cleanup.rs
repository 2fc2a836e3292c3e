use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::verification::VerificationService};

/// Every hour, on the hour.
const CLEANUP_SCHEDULE: &str = "0 0 * * * *";

/// Starts the verification cleanup scheduler.
///
/// Deletes unconfirmed verification codes whose expiry has passed. Confirmed
/// verifications are kept.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_verifications(&db).await {
                tracing::error!("Error purging expired verifications: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Verification cleanup scheduler started");

    Ok(scheduler)
}

async fn purge_expired_verifications(db: &DatabaseConnection) -> Result<u64, AppError> {
    let purged = VerificationService::new(db).purge_expired().await?;

    if purged > 0 {
        tracing::info!("Purged {} expired verification codes", purged);
    }

    Ok(purged)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use entity::sea_orm_active_enums::VerificationChannel;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    #[tokio::test]
    async fn purges_only_expired_unconfirmed_codes() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await.unwrap();
        factory::verification::VerificationFactory::new(db, user.id)
            .channel(VerificationChannel::Email)
            .expires_at(Utc::now() - Duration::minutes(1))
            .build()
            .await
            .unwrap();
        let live = factory::verification::VerificationFactory::new(db, user.id)
            .channel(VerificationChannel::Phone)
            .expires_at(Utc::now() + Duration::minutes(10))
            .build()
            .await
            .unwrap();

        let purged = purge_expired_verifications(db).await.unwrap();

        assert_eq!(purged, 1);
        let remaining = entity::prelude::Verification::find().all(db).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, live.id);
    }
}
