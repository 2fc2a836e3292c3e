use crate::server::data::connection::ConnectionRepository;
use entity::sea_orm_active_enums::ConnectionStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_between;
