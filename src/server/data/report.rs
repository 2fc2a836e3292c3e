use chrono::Utc;
use entity::sea_orm_active_enums::{ReportStatus, ReportTarget};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::report::{CreateReportParams, Report};

pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReportParams) -> Result<Report, DbErr> {
        let now = Utc::now();
        let entity = entity::report::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            reporter_id: ActiveValue::Set(params.reporter_id),
            target_type: ActiveValue::Set(params.target_type),
            target_id: ActiveValue::Set(params.target_id),
            reason: ActiveValue::Set(params.reason),
            details: ActiveValue::Set(params.details),
            status: ActiveValue::Set(ReportStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Report::from_entity(entity))
    }

    /// Whether the reporter already has a pending report against this target.
    pub async fn has_pending(
        &self,
        reporter_id: Uuid,
        target_type: ReportTarget,
        target_id: Uuid,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Report::find()
            .filter(entity::report::Column::ReporterId.eq(reporter_id))
            .filter(entity::report::Column::TargetType.eq(target_type))
            .filter(entity::report::Column::TargetId.eq(target_id))
            .filter(entity::report::Column::Status.eq(ReportStatus::Pending))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists reports oldest first so the moderation queue is worked in order.
    pub async fn get_paginated(
        &self,
        status: Option<ReportStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Report>, u64), DbErr> {
        let mut query = entity::prelude::Report::find();
        if let Some(status) = status {
            query = query.filter(entity::report::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_asc(entity::report::Column::CreatedAt)
            .order_by_asc(entity::report::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((entities.into_iter().map(Report::from_entity).collect(), total))
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: ReportStatus,
    ) -> Result<Option<Report>, DbErr> {
        let Some(report) = entity::prelude::Report::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::report::ActiveModel = report.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Report::from_entity(entity)))
    }
}
