use crate::server::{
    data::analytics::AnalyticsRepository,
    model::analytics::{RecordEngagementParams, RecordPageVisitParams},
};
use entity::sea_orm_active_enums::{EngagementAction, EngagementTarget};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod counts;
