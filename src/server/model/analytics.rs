use entity::sea_orm_active_enums::{EngagementAction, EngagementTarget};
use uuid::Uuid;

use crate::model::analytics::RecordPageVisitDto;

#[derive(Debug, Clone)]
pub struct RecordPageVisitParams {
    pub user_id: Option<Uuid>,
    pub path: String,
    pub referrer: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl RecordPageVisitParams {
    /// Builds visit params from the request body plus what the server saw of the client.
    pub fn from_dto(
        user_id: Option<Uuid>,
        dto: RecordPageVisitDto,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            user_id,
            path: dto.path,
            referrer: dto.referrer,
            ip_address,
            user_agent: user_agent.map(|agent| agent.chars().take(255).collect()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordEngagementParams {
    pub user_id: Uuid,
    pub target_type: EngagementTarget,
    pub target_id: Uuid,
    pub action: EngagementAction,
}

pub fn action_key(action: EngagementAction) -> &'static str {
    match action {
        EngagementAction::View => "view",
        EngagementAction::Click => "click",
        EngagementAction::Share => "share",
        EngagementAction::Save => "save",
    }
}
