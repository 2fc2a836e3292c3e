//! HTTP handlers, one module per API area.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into service parameters, call
//! the service layer and turn the returned domain models back into DTOs.

pub mod analytics;
pub mod auth;
pub mod connection;
pub mod forum;
pub mod group;
pub mod kyc;
pub mod notification;
pub mod opening;
pub mod payment;
pub mod plan;
pub mod reaction;
pub mod report;
pub mod service;
pub mod upload;
pub mod user;
pub mod verification;
