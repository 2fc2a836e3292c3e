use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::GroupPrivacy;
use uuid::Uuid;

use crate::model::group::{CreateGroupDto, GroupDto, UpdateGroupDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub privacy: GroupPrivacy,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            cover_image: entity.cover_image,
            privacy: entity.privacy,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            cover_image: self.cover_image,
            privacy: self.privacy,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Private groups are only visible to their owner and admins.
    pub fn is_visible_to(&self, viewer_id: Option<Uuid>, viewer_is_admin: bool) -> bool {
        self.privacy == GroupPrivacy::Public || viewer_is_admin || viewer_id == Some(self.owner_id)
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub privacy: GroupPrivacy,
}

impl CreateGroupParams {
    pub fn from_dto(owner_id: Uuid, dto: CreateGroupDto) -> Self {
        Self {
            owner_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            cover_image: dto.cover_image,
            privacy: dto.privacy.unwrap_or(GroupPrivacy::Public),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGroupParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub privacy: Option<GroupPrivacy>,
}

impl UpdateGroupParams {
    pub fn from_dto(dto: UpdateGroupDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
            cover_image: dto.cover_image,
            privacy: dto.privacy,
        }
    }
}
