//! Group factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::GroupPrivacy;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test groups owned by a given user.
///
/// The slug defaults to `"group-{id}"` and is not derived from the name, so tests that
/// care about slug derivation go through the repository instead.
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: Uuid,
    name: String,
    slug: String,
    privacy: GroupPrivacy,
}

impl<'a> GroupFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Group {}", id),
            slug: format!("group-{}", id),
            privacy: GroupPrivacy::Public,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn privacy(mut self, privacy: GroupPrivacy) -> Self {
        self.privacy = privacy;
        self
    }

    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        let now = Utc::now();
        entity::group::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(None),
            cover_image: ActiveValue::Set(None),
            privacy: ActiveValue::Set(self.privacy),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_group(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db, owner_id).build().await
}
