use crate::server::data::report::ReportRepository;
use entity::sea_orm_active_enums::{ReportStatus, ReportTarget};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod has_pending;
