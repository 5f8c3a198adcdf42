use sea_orm::entity::prelude::*;

/// A user-submitted impression recorded against a prayer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "impression")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub prayer_id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub user_id: String,
    pub created_at: DateTimeUtc,
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
