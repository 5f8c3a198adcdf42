use sea_orm::entity::prelude::*;

/// Discriminates user participants from group participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum ParticipantKind {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "group")]
    Group,
}

/// Membership row linking a user or group to a prayer.
///
/// The composite primary key makes participant addition naturally idempotent:
/// inserting an existing member is an `ON CONFLICT DO NOTHING`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prayer_participant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub prayer_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub member_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub kind: ParticipantKind,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::prayer::Entity",
        from = "Column::PrayerId",
        to = "super::prayer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Prayer,
}

impl Related<super::prayer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
