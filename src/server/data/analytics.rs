//! Page visit and engagement tracking.

use chrono::Utc;
use entity::sea_orm_active_enums::{EngagementAction, EngagementTarget};
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Iterable,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::analytics::{RecordEngagementParams, RecordPageVisitParams};

pub struct AnalyticsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnalyticsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a page visit and returns its id.
    pub async fn record_page_visit(&self, params: RecordPageVisitParams) -> Result<Uuid, DbErr> {
        let entity = entity::page_visit::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            path: ActiveValue::Set(params.path),
            referrer: ActiveValue::Set(params.referrer),
            ip_address: ActiveValue::Set(params.ip_address),
            user_agent: ActiveValue::Set(params.user_agent),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Stores an engagement event and returns its id.
    pub async fn record_engagement(&self, params: RecordEngagementParams) -> Result<Uuid, DbErr> {
        let entity = entity::engagement::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            target_type: ActiveValue::Set(params.target_type),
            target_id: ActiveValue::Set(params.target_id),
            action: ActiveValue::Set(params.action),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Visit counts per path, most visited first, capped at `limit` paths.
    pub async fn page_visit_counts(&self, limit: u64) -> Result<Vec<(String, u64)>, DbErr> {
        let visits = SimpleExpr::from(Func::count(Expr::col(entity::page_visit::Column::Id)));

        let rows: Vec<(String, i64)> = entity::prelude::PageVisit::find()
            .select_only()
            .column(entity::page_visit::Column::Path)
            .column_as(visits.clone(), "visits")
            .group_by(entity::page_visit::Column::Path)
            .order_by_desc(visits)
            .order_by_asc(entity::page_visit::Column::Path)
            .limit(limit)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(path, visits)| (path, visits.max(0) as u64))
            .collect())
    }

    /// Engagement counts on a target per action, skipping actions nobody took.
    pub async fn engagement_counts(
        &self,
        target_type: EngagementTarget,
        target_id: Uuid,
    ) -> Result<Vec<(EngagementAction, u64)>, DbErr> {
        let mut counts = Vec::new();

        for action in EngagementAction::iter() {
            let count = entity::prelude::Engagement::find()
                .filter(entity::engagement::Column::TargetType.eq(target_type))
                .filter(entity::engagement::Column::TargetId.eq(target_id))
                .filter(entity::engagement::Column::Action.eq(action))
                .count(self.db)
                .await?;

            if count > 0 {
                counts.push((action, count));
            }
        }

        Ok(counts)
    }
}
