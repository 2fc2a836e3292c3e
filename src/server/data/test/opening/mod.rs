use crate::server::data::{
    opening::OpeningRepository, partnership::PartnershipRepository,
    partnership_group::PartnershipGroupRepository,
};
use entity::sea_orm_active_enums::{OpeningStatus, PartnershipStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod partnership;
mod partnership_group;
mod set_status;
