//! Factories for connections, notifications, reactions and reports.

use chrono::Utc;
use entity::sea_orm_active_enums::{
    ConnectionStatus, NotificationKind, ReactionKind, ReactionTarget, ReportStatus, ReportTarget,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a connection request between two users with the given status.
pub async fn create_connection(
    db: &DatabaseConnection,
    requester_id: Uuid,
    addressee_id: Uuid,
    status: ConnectionStatus,
) -> Result<entity::connection::Model, DbErr> {
    let now = Utc::now();
    entity::connection::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        requester_id: ActiveValue::Set(requester_id),
        addressee_id: ActiveValue::Set(addressee_id),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Creates an unread system notification for the user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        actor_id: ActiveValue::Set(None),
        kind: ActiveValue::Set(NotificationKind::System),
        message: ActiveValue::Set("Welcome to BuyersAlike".to_string()),
        link: ActiveValue::Set(None),
        read_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

pub async fn create_reaction(
    db: &DatabaseConnection,
    user_id: Uuid,
    target_type: ReactionTarget,
    target_id: Uuid,
    kind: ReactionKind,
) -> Result<entity::reaction::Model, DbErr> {
    entity::reaction::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        target_type: ActiveValue::Set(target_type),
        target_id: ActiveValue::Set(target_id),
        kind: ActiveValue::Set(kind),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a pending report filed by `reporter_id`.
pub async fn create_report(
    db: &DatabaseConnection,
    reporter_id: Uuid,
    target_type: ReportTarget,
    target_id: Uuid,
) -> Result<entity::report::Model, DbErr> {
    let now = Utc::now();
    entity::report::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        reporter_id: ActiveValue::Set(reporter_id),
        target_type: ActiveValue::Set(target_type),
        target_id: ActiveValue::Set(target_id),
        reason: ActiveValue::Set("spam".to_string()),
        details: ActiveValue::Set(None),
        status: ActiveValue::Set(ReportStatus::Pending),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
