use crate::server::{data::payment::PaymentRepository, model::payment::CreatePaymentParams};
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
