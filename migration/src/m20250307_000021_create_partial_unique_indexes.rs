//! Partial unique indexes.
//!
//! The index builder has no `WHERE` clause support, so these are issued as raw SQL.

use sea_orm_migration::prelude::*;

const UP: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS uq_reports_pending_per_target \
     ON reports (reporter_id, target_type, target_id) WHERE status = 'pending'",
    "CREATE UNIQUE INDEX IF NOT EXISTS uq_verifications_open_per_channel \
     ON verifications (user_id, channel) WHERE verified_at IS NULL",
    "CREATE UNIQUE INDEX IF NOT EXISTS uq_kyc_applications_pending_per_user \
     ON kyc_applications (user_id) WHERE status = 'pending'",
    "CREATE UNIQUE INDEX IF NOT EXISTS uq_partnerships_active_per_opening \
     ON partnerships (opening_id, user_id) WHERE status IN ('pending', 'accepted')",
];

const DOWN: &[&str] = &[
    "DROP INDEX IF EXISTS uq_partnerships_active_per_opening",
    "DROP INDEX IF EXISTS uq_kyc_applications_pending_per_user",
    "DROP INDEX IF EXISTS uq_verifications_open_per_channel",
    "DROP INDEX IF EXISTS uq_reports_pending_per_target",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for sql in UP {
            db.execute_unprepared(sql).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for sql in DOWN {
            db.execute_unprepared(sql).await?;
        }

        Ok(())
    }
}
