use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::PartnershipStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "partnerships")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub opening_id: Uuid,
    pub user_id: Uuid,
    pub partnership_group_id: Option<Uuid>,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub status: PartnershipStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::opening::Entity",
        from = "Column::OpeningId",
        to = "super::opening::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Opening,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::partnership_group::Entity",
        from = "Column::PartnershipGroupId",
        to = "super::partnership_group::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PartnershipGroup,
}

impl Related<super::opening::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Opening.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::partnership_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartnershipGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
