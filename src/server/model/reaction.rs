use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ReactionKind, ReactionTarget};
use uuid::Uuid;

use crate::model::{api::CountDto, reaction::{ReactionDto, ReactionSummaryDto}};

#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub target_type: ReactionTarget,
    pub target_id: Uuid,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    pub fn from_entity(entity: entity::reaction::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            target_type: entity.target_type,
            target_id: entity.target_id,
            kind: entity.kind,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReactionDto {
        ReactionDto {
            id: self.id,
            user_id: self.user_id,
            target_type: self.target_type,
            target_id: self.target_id,
            kind: self.kind,
        }
    }
}

/// Per-kind reaction counts for one target. Kinds nobody used are omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionSummary {
    pub target_type: ReactionTarget,
    pub target_id: Uuid,
    pub counts: Vec<(ReactionKind, u64)>,
}

impl ReactionSummary {
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn into_dto(self) -> ReactionSummaryDto {
        let total = self.total();
        ReactionSummaryDto {
            target_type: self.target_type,
            target_id: self.target_id,
            total,
            counts: self
                .counts
                .into_iter()
                .map(|(kind, count)| CountDto {
                    key: kind_key(kind).to_string(),
                    count,
                })
                .collect(),
        }
    }
}

pub fn kind_key(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "like",
        ReactionKind::Love => "love",
        ReactionKind::Laugh => "laugh",
        ReactionKind::Sad => "sad",
        ReactionKind::Angry => "angry",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_totals_counts() {
        let summary = ReactionSummary {
            target_type: ReactionTarget::Service,
            target_id: Uuid::new_v4(),
            counts: vec![(ReactionKind::Like, 3), (ReactionKind::Sad, 1)],
        };

        let dto = summary.into_dto();
        assert_eq!(dto.total, 4);
        assert_eq!(dto.counts[0].key, "like");
        assert_eq!(dto.counts[1].count, 1);
    }
}
