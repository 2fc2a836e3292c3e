//! Service listing factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ServiceStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test service listings.
///
/// Defaults: published, category `"general"`, 5000 USD cents, slug `"service-{id}"`.
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    group_id: Option<Uuid>,
    title: String,
    slug: String,
    category: String,
    price_cents: i64,
    status: ServiceStatus,
}

impl<'a> ServiceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            group_id: None,
            title: format!("Service {}", id),
            slug: format!("service-{}", id),
            category: "general".to_string(),
            price_cents: 5000,
            status: ServiceStatus::Published,
        }
    }

    pub fn group_id(mut self, group_id: Uuid) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn status(mut self, status: ServiceStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        let now = Utc::now();
        entity::service::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            group_id: ActiveValue::Set(self.group_id),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set("A service offered in tests".to_string()),
            category: ActiveValue::Set(self.category),
            price_cents: ActiveValue::Set(self.price_cents),
            currency: ActiveValue::Set("USD".to_string()),
            status: ActiveValue::Set(self.status),
            media: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_service(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, user_id).build().await
}
