use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateProfileParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_credentials_by_email;
mod get_all_paginated;
mod update_profile;

fn params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        phone: None,
    }
}
