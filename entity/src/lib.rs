//! SeaORM entity definitions for the BuyersAlike schema.
//!
//! One module per table. Enum-typed columns are string-backed active enums defined in
//! [`sea_orm_active_enums`] so the same definitions work against Postgres in production
//! and in-memory SQLite in tests.

pub mod prelude;

pub mod connection;
pub mod engagement;
pub mod feedback_comment;
pub mod forum_comment;
pub mod group;
pub mod group_comment;
pub mod interest;
pub mod kyc_application;
pub mod notification;
pub mod opening;
pub mod page_visit;
pub mod partnership;
pub mod partnership_group;
pub mod payment;
pub mod plan;
pub mod reaction;
pub mod report;
pub mod sea_orm_active_enums;
pub mod service;
pub mod user;
pub mod verification;
