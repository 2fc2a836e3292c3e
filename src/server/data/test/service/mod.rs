use crate::server::{
    data::service::ServiceRepository,
    model::service::{CreateServiceParams, UpdateServiceParams},
};
use entity::sea_orm_active_enums::ServiceStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_published_paginated;
mod update;

fn params(user_id: Uuid, title: &str, status: ServiceStatus) -> CreateServiceParams {
    CreateServiceParams {
        user_id,
        group_id: None,
        title: title.to_string(),
        description: "Handmade".to_string(),
        category: "crafts".to_string(),
        price_cents: 2500,
        currency: "USD".to_string(),
        status,
    }
}
