//! BuyersAlike Test Utils
//!
//! Shared testing utilities for the BuyersAlike backend. The crate builds isolated test
//! environments on top of an in-memory SQLite database, optionally paired with a
//! `tower-sessions` session backed by the same database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder that picks which entity tables to create
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Error type for test setup failures
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(User).build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = test_utils::factory::create_user(db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! SQLite enforces foreign keys, so tables must be added parent-first. Use
//! `with_all_tables()` when a test touches several areas of the schema.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
