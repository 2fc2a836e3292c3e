use crate::server::{
    data::group::GroupRepository,
    model::group::{CreateGroupParams, UpdateGroupParams},
};
use entity::sea_orm_active_enums::GroupPrivacy;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_visible_paginated;
mod update;

fn params(owner_id: Uuid, name: &str, privacy: GroupPrivacy) -> CreateGroupParams {
    CreateGroupParams {
        owner_id,
        name: name.to_string(),
        description: None,
        cover_image: None,
        privacy,
    }
}
