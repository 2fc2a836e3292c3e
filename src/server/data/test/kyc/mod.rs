use crate::server::{data::kyc::KycRepository, model::kyc::ReviewKycParams};
use entity::sea_orm_active_enums::KycStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod review;
