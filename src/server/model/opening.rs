//! Partnership openings, the groups partners are sorted into, and applications.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{OpeningStatus, PartnershipGroupStatus, PartnershipStatus};
use uuid::Uuid;

use crate::model::opening::{
    ApplyPartnershipDto, CreateOpeningDto, OpeningDto, PartnershipDto, PartnershipGroupDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Opening {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub slots: i32,
    pub status: OpeningStatus,
    pub created_at: DateTime<Utc>,
}

impl Opening {
    pub fn from_entity(entity: entity::opening::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            title: entity.title,
            description: entity.description,
            category: entity.category,
            slots: entity.slots,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    /// Converts to a DTO carrying the number of accepted partnerships.
    pub fn into_dto(self, filled_slots: u64) -> OpeningDto {
        OpeningDto {
            id: self.id,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            category: self.category,
            slots: self.slots,
            filled_slots,
            status: self.status,
            created_at: self.created_at,
        }
    }

    /// Open and closed openings can swap freely; an open opening can be marked filled.
    pub fn can_transition_to(&self, next: OpeningStatus) -> bool {
        matches!(
            (self.status, next),
            (OpeningStatus::Open, OpeningStatus::Closed)
                | (OpeningStatus::Closed, OpeningStatus::Open)
                | (OpeningStatus::Open, OpeningStatus::Filled)
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreateOpeningParams {
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub slots: i32,
}

impl CreateOpeningParams {
    pub fn from_dto(owner_id: Uuid, dto: CreateOpeningDto) -> Self {
        Self {
            owner_id,
            title: dto.title.trim().to_string(),
            description: dto.description,
            category: dto.category.trim().to_lowercase(),
            slots: dto.slots,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartnershipGroup {
    pub id: Uuid,
    pub opening_id: Uuid,
    pub name: String,
    pub status: PartnershipGroupStatus,
    pub created_at: DateTime<Utc>,
}

impl PartnershipGroup {
    pub fn from_entity(entity: entity::partnership_group::Model) -> Self {
        Self {
            id: entity.id,
            opening_id: entity.opening_id,
            name: entity.name,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PartnershipGroupDto {
        PartnershipGroupDto {
            id: self.id,
            opening_id: self.opening_id,
            name: self.name,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Partnership {
    pub id: Uuid,
    pub opening_id: Uuid,
    pub user_id: Uuid,
    pub partnership_group_id: Option<Uuid>,
    pub message: Option<String>,
    pub status: PartnershipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Partnership {
    pub fn from_entity(entity: entity::partnership::Model) -> Self {
        Self {
            id: entity.id,
            opening_id: entity.opening_id,
            user_id: entity.user_id,
            partnership_group_id: entity.partnership_group_id,
            message: entity.message,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PartnershipDto {
        PartnershipDto {
            id: self.id,
            opening_id: self.opening_id,
            user_id: self.user_id,
            partnership_group_id: self.partnership_group_id,
            message: self.message,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Pending and accepted applications block a second application to the same opening.
    pub fn is_live(&self) -> bool {
        matches!(
            self.status,
            PartnershipStatus::Pending | PartnershipStatus::Accepted
        )
    }
}

#[derive(Debug, Clone)]
pub struct ApplyPartnershipParams {
    pub opening_id: Uuid,
    pub user_id: Uuid,
    pub message: Option<String>,
}

impl ApplyPartnershipParams {
    pub fn from_dto(opening_id: Uuid, user_id: Uuid, dto: ApplyPartnershipDto) -> Self {
        Self {
            opening_id,
            user_id,
            message: dto.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening(status: OpeningStatus) -> Opening {
        Opening {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "Bulk rice".to_string(),
            description: "Split a pallet".to_string(),
            category: "food".to_string(),
            slots: 3,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn open_and_closed_toggle() {
        assert!(opening(OpeningStatus::Open).can_transition_to(OpeningStatus::Closed));
        assert!(opening(OpeningStatus::Closed).can_transition_to(OpeningStatus::Open));
    }

    #[test]
    fn filled_is_terminal() {
        let filled = opening(OpeningStatus::Filled);
        assert!(!filled.can_transition_to(OpeningStatus::Open));
        assert!(!filled.can_transition_to(OpeningStatus::Closed));
        assert!(!opening(OpeningStatus::Closed).can_transition_to(OpeningStatus::Filled));
    }
}
