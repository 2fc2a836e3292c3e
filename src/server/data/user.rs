//! User data repository.
//!
//! Handles user records and the per-user flags other areas flip (verification, KYC,
//! plan). Emails are stored lower-cased so lookups are case-insensitive.

use chrono::Utc;
use entity::sea_orm_active_enums::{UserRole, UserStatus, VerificationChannel};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active user with the `user` role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, including unique violations on email/username
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email.to_lowercase()),
            password_hash: ActiveValue::Set(params.password_hash),
            phone: ActiveValue::Set(params.phone),
            bio: ActiveValue::Set(None),
            avatar: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            role: ActiveValue::Set(UserRole::User),
            status: ActiveValue::Set(UserStatus::Active),
            email_verified: ActiveValue::Set(false),
            phone_verified: ActiveValue::Set(false),
            kyc_verified: ActiveValue::Set(false),
            plan_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email for login.
    ///
    /// # Returns
    /// - `Ok(Some((user, password_hash)))` - User found
    /// - `Ok(None)` - No user with that email
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (User::from_entity(e), hash)
        }))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all users ordered by username.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users on the requested page and the total number of users
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((entities.into_iter().map(User::from_entity).collect(), total))
    }

    /// Applies the non-empty fields of a profile update.
    ///
    /// Changing the phone number clears `phone_verified`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update_profile(
        &self,
        id: Uuid,
        params: UpdateProfileParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let phone_changed = params
            .phone
            .as_ref()
            .is_some_and(|phone| user.phone.as_ref() != Some(phone));

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if phone_changed {
            active_model.phone = ActiveValue::Set(params.phone);
            active_model.phone_verified = ActiveValue::Set(false);
        }
        if let Some(bio) = params.bio {
            active_model.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(location) = params.location {
            active_model.location = ActiveValue::Set(Some(location));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    pub async fn set_avatar(&self, id: Uuid, avatar: String) -> Result<Option<User>, DbErr> {
        self.update_with(id, |model| {
            model.avatar = ActiveValue::Set(Some(avatar));
        })
        .await
    }

    pub async fn set_status(&self, id: Uuid, status: UserStatus) -> Result<Option<User>, DbErr> {
        self.update_with(id, |model| {
            model.status = ActiveValue::Set(status);
        })
        .await
    }

    /// Marks the email or phone of a user as verified.
    pub async fn mark_verified(
        &self,
        id: Uuid,
        channel: VerificationChannel,
    ) -> Result<Option<User>, DbErr> {
        self.update_with(id, |model| match channel {
            VerificationChannel::Email => model.email_verified = ActiveValue::Set(true),
            VerificationChannel::Phone => model.phone_verified = ActiveValue::Set(true),
        })
        .await
    }

    pub async fn set_kyc_verified(
        &self,
        id: Uuid,
        kyc_verified: bool,
    ) -> Result<Option<User>, DbErr> {
        self.update_with(id, |model| {
            model.kyc_verified = ActiveValue::Set(kyc_verified);
        })
        .await
    }

    pub async fn set_plan(&self, id: Uuid, plan_id: Option<Uuid>) -> Result<Option<User>, DbErr> {
        self.update_with(id, |model| {
            model.plan_id = ActiveValue::Set(plan_id);
        })
        .await
    }

    /// Deletes a user; owned content cascades in the database.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn update_with(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut entity::user::ActiveModel),
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        apply(&mut active_model);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }
}
