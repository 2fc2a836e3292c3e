//! Factories for openings, partnership groups and partnerships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{OpeningStatus, PartnershipGroupStatus, PartnershipStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for openings; defaults to an open opening with 3 slots.
pub struct OpeningFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: Uuid,
    title: String,
    category: String,
    slots: i32,
    status: OpeningStatus,
}

impl<'a> OpeningFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: Uuid) -> Self {
        Self {
            db,
            owner_id,
            title: format!("Opening {}", next_id()),
            category: "bulk-buying".to_string(),
            slots: 3,
            status: OpeningStatus::Open,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn slots(mut self, slots: i32) -> Self {
        self.slots = slots;
        self
    }

    pub fn status(mut self, status: OpeningStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::opening::Model, DbErr> {
        let now = Utc::now();
        entity::opening::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(self.owner_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Looking for partners".to_string()),
            category: ActiveValue::Set(self.category),
            slots: ActiveValue::Set(self.slots),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for partnership applications; defaults to a pending application.
pub struct PartnershipFactory<'a> {
    db: &'a DatabaseConnection,
    opening_id: Uuid,
    user_id: Uuid,
    partnership_group_id: Option<Uuid>,
    status: PartnershipStatus,
}

impl<'a> PartnershipFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, opening_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            opening_id,
            user_id,
            partnership_group_id: None,
            status: PartnershipStatus::Pending,
        }
    }

    pub fn partnership_group_id(mut self, partnership_group_id: Uuid) -> Self {
        self.partnership_group_id = Some(partnership_group_id);
        self
    }

    pub fn status(mut self, status: PartnershipStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::partnership::Model, DbErr> {
        let now = Utc::now();
        entity::partnership::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            opening_id: ActiveValue::Set(self.opening_id),
            user_id: ActiveValue::Set(self.user_id),
            partnership_group_id: ActiveValue::Set(self.partnership_group_id),
            message: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_opening(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<entity::opening::Model, DbErr> {
    OpeningFactory::new(db, owner_id).build().await
}

/// Creates a `forming` partnership group named `"Group {id}"` under the opening.
pub async fn create_partnership_group(
    db: &DatabaseConnection,
    opening_id: Uuid,
) -> Result<entity::partnership_group::Model, DbErr> {
    let now = Utc::now();
    entity::partnership_group::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        opening_id: ActiveValue::Set(opening_id),
        name: ActiveValue::Set(format!("Group {}", next_id())),
        status: ActiveValue::Set(PartnershipGroupStatus::Forming),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

pub async fn create_partnership(
    db: &DatabaseConnection,
    opening_id: Uuid,
    user_id: Uuid,
) -> Result<entity::partnership::Model, DbErr> {
    PartnershipFactory::new(db, opening_id, user_id).build().await
}
