use crate::server::data::reaction::ReactionRepository;
use entity::sea_orm_active_enums::{ReactionKind, ReactionTarget};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_kind;
mod upsert;
