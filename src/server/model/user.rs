//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{UserRole, UserStatus};
use uuid::Uuid;

use crate::model::{
    auth::RegisterDto,
    user::{PublicUserDto, UpdateProfileDto, UserDto},
};

/// A registered account. The password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub kyc_verified: bool,
    pub plan_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            username: entity.username,
            email: entity.email,
            phone: entity.phone,
            bio: entity.bio,
            avatar: entity.avatar,
            location: entity.location,
            role: entity.role,
            status: entity.status,
            email_verified: entity.email_verified,
            phone_verified: entity.phone_verified,
            kyc_verified: entity.kyc_verified,
            plan_id: entity.plan_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Whether the user owns a resource or may act on it as an admin.
    pub fn can_manage(&self, owner_id: Uuid) -> bool {
        self.id == owner_id || self.is_admin()
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            bio: self.bio,
            avatar: self.avatar,
            location: self.location,
            role: self.role,
            status: self.status,
            email_verified: self.email_verified,
            phone_verified: self.phone_verified,
            kyc_verified: self.kyc_verified,
            plan_id: self.plan_id,
            created_at: self.created_at,
        }
    }

    pub fn into_public_dto(self) -> PublicUserDto {
        PublicUserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            bio: self.bio,
            avatar: self.avatar,
            location: self.location,
            kyc_verified: self.kyc_verified,
            created_at: self.created_at,
        }
    }
}

/// Registration input with the plaintext password, before hashing.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            username: dto.username,
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            phone: dto.phone,
        }
    }
}

/// Parameters for inserting a freshly registered user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
}

/// Profile fields a user may change; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone: dto.phone,
            bio: dto.bio,
            location: dto.location,
        }
    }
}
