//! Database repository layer for all domain entities.
//!
//! Each repository wraps a SeaORM connection and returns domain models from
//! `server::model`. Repositories are generic over [`sea_orm::ConnectionTrait`] so services
//! can run several of them inside one transaction.

pub mod analytics;
pub mod connection;
pub mod feedback;
pub mod forum_comment;
pub mod group;
pub mod group_comment;
pub mod interest;
pub mod kyc;
pub mod notification;
pub mod opening;
pub mod partnership;
pub mod partnership_group;
pub mod payment;
pub mod plan;
pub mod reaction;
pub mod report;
pub mod service;
pub mod user;
pub mod verification;

#[cfg(test)]
mod test;
