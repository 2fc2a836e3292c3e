use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a chosen set of tables.
///
/// Tables are created in the order they are added, so entities holding foreign keys
/// must come after the tables they reference.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Group};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Group)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed by `build()`, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement for the SQLite backend from the entity
    /// definition, including its foreign keys and unique columns.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to work with user profiles.
    ///
    /// Adds `Plan` and `User` in dependency order.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Plan).with_table(User)
    }

    /// Adds the tables needed for the group and service marketplace.
    ///
    /// Adds `Plan`, `User`, `Group` and `Service` in dependency order.
    pub fn with_marketplace_tables(self) -> Self {
        self.with_user_tables().with_table(Group).with_table(Service)
    }

    /// Adds the tables needed for openings and partnerships.
    ///
    /// Adds `Plan`, `User`, `Opening`, `PartnershipGroup`, `Partnership` and
    /// `Notification` in dependency order.
    pub fn with_partnership_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Opening)
            .with_table(PartnershipGroup)
            .with_table(Partnership)
            .with_table(Notification)
    }

    /// Adds every table in the schema in foreign key dependency order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_all_tables().build().await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_marketplace_tables()
            .with_table(ForumComment)
            .with_table(GroupComment)
            .with_table(FeedbackComment)
            .with_table(Reaction)
            .with_table(Report)
            .with_table(Verification)
            .with_table(Payment)
            .with_table(KycApplication)
            .with_table(Opening)
            .with_table(PartnershipGroup)
            .with_table(Partnership)
            .with_table(Notification)
            .with_table(Interest)
            .with_table(Connection)
            .with_table(PageVisit)
            .with_table(Engagement)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the in-memory database ready
    /// - `Err(TestError::Database)` - Failed to connect or to create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
