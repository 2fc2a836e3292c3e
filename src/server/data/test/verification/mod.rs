use crate::server::data::verification::VerificationRepository;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::VerificationChannel;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_expired;
mod find_pending;
