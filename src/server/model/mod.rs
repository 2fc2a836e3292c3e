//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and turned
//! into DTOs at the controller boundary. Parameter types carry already-validated input
//! from controllers into services.

pub mod analytics;
pub mod comment;
pub mod connection;
pub mod group;
pub mod interest;
pub mod kyc;
pub mod notification;
pub mod opening;
pub mod payment;
pub mod plan;
pub mod reaction;
pub mod report;
pub mod service;
pub mod user;
pub mod verification;
