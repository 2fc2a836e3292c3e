//! Applications to openings and their lifecycle.

use entity::sea_orm_active_enums::{NotificationKind, OpeningStatus, PartnershipStatus};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        opening::OpeningRepository, partnership::PartnershipRepository,
        partnership_group::PartnershipGroupRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        opening::{ApplyPartnershipParams, Opening, Partnership},
        user::User,
    },
    service::{ensure_owner, notification::notify},
    util::pagination::Paginated,
};

pub struct PartnershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnershipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn opening(&self, opening_id: Uuid) -> Result<Opening, AppError> {
        OpeningRepository::new(self.db)
            .find_by_id(opening_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Opening not found".to_string()))
    }

    /// Applies to an opening and notifies its owner.
    ///
    /// # Returns
    /// - `Ok(Partnership)` - The pending application
    /// - `Err(AppError::BadRequest)` - Opening not open, or owned by the applicant
    /// - `Err(AppError::Conflict)` - The applicant already has a pending or accepted
    ///   application
    pub async fn apply(
        &self,
        actor: &User,
        params: ApplyPartnershipParams,
    ) -> Result<Partnership, AppError> {
        let opening = self.opening(params.opening_id).await?;

        if opening.status != OpeningStatus::Open {
            return Err(AppError::BadRequest(
                "Opening is not accepting applications".to_string(),
            ));
        }
        if opening.owner_id == actor.id {
            return Err(AppError::BadRequest(
                "You cannot apply to your own opening".to_string(),
            ));
        }
        if PartnershipRepository::new(self.db)
            .has_live(opening.id, actor.id)
            .await?
        {
            return Err(AppError::Conflict(
                "You have already applied to this opening".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let partnership = PartnershipRepository::new(&txn).create(params).await?;
        notify(
            &txn,
            opening.owner_id,
            actor.id,
            NotificationKind::Partnership,
            format!("{} applied to {}", actor.username, opening.title),
            Some(format!("/openings/{}", opening.id)),
        )
        .await?;
        txn.commit().await?;

        Ok(partnership)
    }

    /// Lists applications to an opening; owner or admin only.
    pub async fn list(
        &self,
        actor: &User,
        opening_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Partnership>, AppError> {
        let opening = self.opening(opening_id).await?;
        ensure_owner(actor, opening.owner_id, true)?;

        let (partnerships, total) = PartnershipRepository::new(self.db)
            .get_by_opening_paginated(opening_id, page, per_page)
            .await?;

        Ok(Paginated::new(partnerships, total, page, per_page))
    }

    /// Changes an application's status.
    ///
    /// The opening owner accepts or rejects pending applications; accepting may place the
    /// partner in one of the opening's groups, and accepting into the last free slot
    /// marks the opening filled. The applicant may withdraw a pending or accepted
    /// application, which reopens a filled opening. The other party is notified.
    ///
    /// # Returns
    /// - `Ok(Partnership)` - The updated application
    /// - `Err(AuthError::AccessDenied)` - The actor may not make this change
    /// - `Err(AppError::BadRequest)` - Not allowed from the current status, no free slot,
    ///   or a group from another opening
    pub async fn set_status(
        &self,
        actor: &User,
        id: Uuid,
        status: PartnershipStatus,
        partnership_group_id: Option<Uuid>,
    ) -> Result<Partnership, AppError> {
        let txn = self.db.begin().await?;

        let partnership = PartnershipRepository::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Partnership not found".to_string()))?;
        let opening = OpeningRepository::new(&txn)
            .find_by_id(partnership.opening_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Opening not found".to_string()))?;

        let updated = match status {
            PartnershipStatus::Accepted => {
                self.accept(&txn, actor, &opening, &partnership, partnership_group_id)
                    .await?
            }
            PartnershipStatus::Rejected => {
                ensure_owner(actor, opening.owner_id, false)?;
                if partnership.status != PartnershipStatus::Pending {
                    return Err(AppError::BadRequest(
                        "Only pending applications can be rejected".to_string(),
                    ));
                }

                let updated = set_status(&txn, id, status, None).await?;
                notify(
                    &txn,
                    partnership.user_id,
                    actor.id,
                    NotificationKind::Partnership,
                    format!("Your application to {} was declined", opening.title),
                    Some(format!("/openings/{}", opening.id)),
                )
                .await?;
                updated
            }
            PartnershipStatus::Withdrawn => {
                if partnership.user_id != actor.id {
                    return Err(AuthError::AccessDenied(
                        actor.id,
                        format!("only the applicant may withdraw partnership {}", id),
                    )
                    .into());
                }
                if !partnership.is_live() {
                    return Err(AppError::BadRequest(
                        "Only pending or accepted applications can be withdrawn".to_string(),
                    ));
                }

                let updated = set_status(&txn, id, status, None).await?;
                if partnership.status == PartnershipStatus::Accepted
                    && opening.status == OpeningStatus::Filled
                {
                    OpeningRepository::new(&txn)
                        .set_status(opening.id, OpeningStatus::Open)
                        .await?;
                }
                notify(
                    &txn,
                    opening.owner_id,
                    actor.id,
                    NotificationKind::Partnership,
                    format!("{} withdrew from {}", actor.username, opening.title),
                    Some(format!("/openings/{}", opening.id)),
                )
                .await?;
                updated
            }
            PartnershipStatus::Pending => {
                return Err(AppError::BadRequest(
                    "An application cannot be moved back to pending".to_string(),
                ))
            }
        };

        txn.commit().await?;

        tracing::info!(
            partnership_id = %id,
            actor_id = %actor.id,
            "Partnership moved to {:?}",
            status
        );

        Ok(updated)
    }

    async fn accept(
        &self,
        txn: &DatabaseTransaction,
        actor: &User,
        opening: &Opening,
        partnership: &Partnership,
        partnership_group_id: Option<Uuid>,
    ) -> Result<Partnership, AppError> {
        ensure_owner(actor, opening.owner_id, false)?;

        if partnership.status != PartnershipStatus::Pending {
            return Err(AppError::BadRequest(
                "Only pending applications can be accepted".to_string(),
            ));
        }
        if opening.status != OpeningStatus::Open {
            return Err(AppError::BadRequest(
                "Opening is not accepting partners".to_string(),
            ));
        }

        if let Some(group_id) = partnership_group_id {
            let belongs = PartnershipGroupRepository::new(txn)
                .find_by_id(group_id)
                .await?
                .is_some_and(|group| group.opening_id == opening.id);
            if !belongs {
                return Err(AppError::BadRequest(
                    "partnership_group_id: group does not belong to this opening".to_string(),
                ));
            }
        }

        let accepted = PartnershipRepository::new(txn)
            .count_accepted(opening.id)
            .await?;
        let slots = u64::try_from(opening.slots).unwrap_or(0);
        if accepted >= slots {
            return Err(AppError::BadRequest("All slots are filled".to_string()));
        }

        let updated = set_status(
            txn,
            partnership.id,
            PartnershipStatus::Accepted,
            partnership_group_id,
        )
        .await?;

        if accepted + 1 == slots {
            OpeningRepository::new(txn)
                .set_status(opening.id, OpeningStatus::Filled)
                .await?;
            tracing::info!(opening_id = %opening.id, "Opening filled");
        }

        notify(
            txn,
            partnership.user_id,
            actor.id,
            NotificationKind::Partnership,
            format!("Your application to {} was accepted", opening.title),
            Some(format!("/openings/{}", opening.id)),
        )
        .await?;

        Ok(updated)
    }
}

async fn set_status(
    txn: &DatabaseTransaction,
    id: Uuid,
    status: PartnershipStatus,
    partnership_group_id: Option<Uuid>,
) -> Result<Partnership, AppError> {
    PartnershipRepository::new(txn)
        .set_status(id, status, partnership_group_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Partnership not found".to_string()))
}
