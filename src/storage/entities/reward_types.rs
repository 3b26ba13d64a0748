use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reward_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_id: i32,
    pub reward_level_id: i32,
    pub name: String,
    pub points: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Schools,
    #[sea_orm(
        belongs_to = "super::reward_levels::Entity",
        from = "Column::RewardLevelId",
        to = "super::reward_levels::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    RewardLevels,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schools.def()
    }
}

impl Related<super::reward_levels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RewardLevels.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
