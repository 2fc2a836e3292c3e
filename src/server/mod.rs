//! BuyersAlike HTTP backend.
//!
//! Axum serves the JSON API, SeaORM talks to Postgres and tower-sessions keeps the
//! login session in a cookie backed by the same database.
//!
//! # Layers
//!
//! - `controller/` - One module per API area. Authenticates through `AuthGuard`, turns
//!   DTOs into params and domain models back into DTOs
//! - `service/` - Business rules: ownership, status transitions, notifications
//! - `data/` - Repositories over SeaORM entities, returning domain models
//! - `model/` - Domain models and the params passed from controllers to services
//! - `error/` - `AppError` and the domain errors it wraps, with their HTTP mapping
//! - `middleware/` - Auth guard, session wrapper and upload store
//! - `util/` - Pagination, password hashing, slugs and validated JSON extraction
//!
//! Infrastructure lives in `config`, `state`, `startup`, `router`, `openapi` and
//! `scheduler/`.
//!
//! A request goes router → controller → service → repository and back, with every
//! failure along the way surfacing as an `AppError` response.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
