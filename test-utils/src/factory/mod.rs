//! Factory methods for creating test data.
//!
//! Each factory inserts a row with sensible defaults so tests only spell out the fields
//! they care about. Factories take the ids of the rows they reference; `helpers` has
//! shortcuts that create the parents as well.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let (owner, service) = factory::helpers::create_service_with_owner(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .role(UserRole::Admin)
//!     .build()
//!     .await?;
//!
//! let full = factory::opening::OpeningFactory::new(&db, owner.id)
//!     .slots(1)
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod group;
pub mod helpers;
pub mod opening;
pub mod payment;
pub mod plan;
pub mod service;
pub mod social;
pub mod user;
pub mod verification;

pub use comment::{create_feedback, create_forum_post, create_group_comment};
pub use group::create_group;
pub use opening::{create_opening, create_partnership, create_partnership_group};
pub use payment::create_plan_payment;
pub use plan::create_plan;
pub use service::create_service;
pub use social::{create_connection, create_notification, create_reaction, create_report};
pub use user::{create_admin, create_user};
pub use verification::{create_kyc_application, create_verification};
