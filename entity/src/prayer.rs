use sea_orm::entity::prelude::*;

/// Whether impressions on a prayer are visible while it is open.
///
/// Hidden prayers withhold their impressions (and most metadata) from readers
/// until the prayer closes, at which point everything is revealed at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PrayerType {
    #[sea_orm(string_value = "hidden")]
    Hidden,
    #[sea_orm(string_value = "visible")]
    Visible,
}

impl PrayerType {
    /// Parses the wire representation, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hidden" => Some(Self::Hidden),
            "visible" => Some(Self::Visible),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
        }
    }
}

/// Access modifier controlling who may discover a prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PrayerAccess {
    #[sea_orm(string_value = "private")]
    Private,
    #[sea_orm(string_value = "public")]
    Public,
}

impl PrayerAccess {
    /// Parses the wire representation, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "private" => Some(Self::Private),
            "public" => Some(Self::Public),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prayer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub end_date_time: Option<DateTimeUtc>,
    pub prayer_access: PrayerAccess,
    pub creator_id: String,
    pub prayer_type: PrayerType,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    pub closed_at: Option<DateTimeUtc>,
    pub is_open: bool,
    pub impression_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::impression::Entity")]
    Impression,
    #[sea_orm(has_many = "super::prayer_participant::Entity")]
    PrayerParticipant,
}

impl Related<super::impression::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Impression.def()
    }
}

impl Related<super::prayer_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrayerParticipant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
