pub use sea_orm_migration::prelude::*;

use sea_orm_migration::{sea_orm::DbBackend, schema::pk_uuid};

mod m20250301_000001_create_plan_table;
mod m20250301_000002_create_user_table;
mod m20250301_000003_create_group_table;
mod m20250301_000004_create_service_table;
mod m20250302_000005_create_forum_comment_table;
mod m20250302_000006_create_group_comment_table;
mod m20250302_000007_create_feedback_comment_table;
mod m20250302_000008_create_reaction_table;
mod m20250302_000009_create_report_table;
mod m20250303_000010_create_verification_table;
mod m20250303_000011_create_payment_table;
mod m20250303_000012_create_kyc_application_table;
mod m20250304_000013_create_opening_table;
mod m20250304_000014_create_partnership_group_table;
mod m20250304_000015_create_partnership_table;
mod m20250305_000016_create_notification_table;
mod m20250305_000017_create_interest_table;
mod m20250305_000018_create_connection_table;
mod m20250306_000019_create_page_visit_table;
mod m20250306_000020_create_engagement_table;
mod m20250307_000021_create_partial_unique_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_plan_table::Migration),
            Box::new(m20250301_000002_create_user_table::Migration),
            Box::new(m20250301_000003_create_group_table::Migration),
            Box::new(m20250301_000004_create_service_table::Migration),
            Box::new(m20250302_000005_create_forum_comment_table::Migration),
            Box::new(m20250302_000006_create_group_comment_table::Migration),
            Box::new(m20250302_000007_create_feedback_comment_table::Migration),
            Box::new(m20250302_000008_create_reaction_table::Migration),
            Box::new(m20250302_000009_create_report_table::Migration),
            Box::new(m20250303_000010_create_verification_table::Migration),
            Box::new(m20250303_000011_create_payment_table::Migration),
            Box::new(m20250303_000012_create_kyc_application_table::Migration),
            Box::new(m20250304_000013_create_opening_table::Migration),
            Box::new(m20250304_000014_create_partnership_group_table::Migration),
            Box::new(m20250304_000015_create_partnership_table::Migration),
            Box::new(m20250305_000016_create_notification_table::Migration),
            Box::new(m20250305_000017_create_interest_table::Migration),
            Box::new(m20250305_000018_create_connection_table::Migration),
            Box::new(m20250306_000019_create_page_visit_table::Migration),
            Box::new(m20250306_000020_create_engagement_table::Migration),
            Box::new(m20250307_000021_create_partial_unique_indexes::Migration),
        ]
    }
}

/// UUID primary key column.
///
/// Postgres fills it with `gen_random_uuid()` when an insert omits it. Other backends
/// have no such function, so the application always supplies the id there.
pub(crate) fn uuid_pk<T: IntoIden>(manager: &SchemaManager, name: T) -> ColumnDef {
    let mut column = pk_uuid(name);
    if manager.get_database_backend() == DbBackend::Postgres {
        column.default(Expr::cust("gen_random_uuid()"));
    }
    column
}

#[cfg(test)]
mod tests {
    use sea_orm_migration::sea_orm::{Database, DatabaseConnection};

    use super::*;

    const ALICE: &str = "00000000-0000-4000-8000-000000000001";
    const BOB: &str = "00000000-0000-4000-8000-000000000002";
    const TARGET: &str = "00000000-0000-4000-8000-0000000000ff";

    async fn migrated() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        for (id, name) in [(ALICE, "alice"), (BOB, "bob")] {
            db.execute_unprepared(&format!(
                "INSERT INTO users (id, first_name, last_name, username, email, password_hash) \
                 VALUES ('{id}', 'First', 'Last', '{name}', '{name}@example.com', 'hash')"
            ))
            .await
            .unwrap();
        }

        db
    }

    async fn insert_report(db: &DatabaseConnection, id: u8, status: &str) -> Result<(), DbErr> {
        db.execute_unprepared(&format!(
            "INSERT INTO reports (id, reporter_id, target_type, target_id, reason, status) \
             VALUES ('00000000-0000-4000-8000-0000000001{id:02x}', '{ALICE}', 'user', \
             '{TARGET}', 'spam', '{status}')"
        ))
        .await
        .map(|_| ())
    }

    #[tokio::test]
    async fn applies_and_reverts_every_migration() {
        let db = migrated().await;

        Migrator::down(&db, None).await.unwrap();

        assert!(Migrator::get_applied_migrations(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_status_outside_the_enum() {
        let db = migrated().await;

        assert!(insert_report(&db, 1, "escalated").await.is_err());
        assert!(db
            .execute_unprepared(&format!("UPDATE users SET status = 'banned' WHERE id = '{BOB}'"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn allows_one_pending_report_per_target() {
        let db = migrated().await;

        insert_report(&db, 1, "pending").await.unwrap();

        assert!(insert_report(&db, 2, "pending").await.is_err());
        insert_report(&db, 3, "dismissed").await.unwrap();
    }

    #[tokio::test]
    async fn rejects_connection_to_self() {
        let db = migrated().await;

        let result = db
            .execute_unprepared(&format!(
                "INSERT INTO connections (id, requester_id, addressee_id) \
                 VALUES ('00000000-0000-4000-8000-000000000201', '{ALICE}', '{ALICE}')"
            ))
            .await;
        assert!(result.is_err());

        db.execute_unprepared(&format!(
            "INSERT INTO connections (id, requester_id, addressee_id) \
             VALUES ('00000000-0000-4000-8000-000000000202', '{ALICE}', '{BOB}')"
        ))
        .await
        .unwrap();
    }
}
