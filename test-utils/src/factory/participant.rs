//! Participant factory for creating test prayer participant entities.

use entity::prayer_participant::ParticipantKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a participant row to a prayer.
///
/// # Arguments
/// - `db` - Database connection
/// - `prayer_id` - ID of the prayer
/// - `member_id` - User or group identity to add
/// - `kind` - Whether `member_id` refers to a user or a group
///
/// # Returns
/// - `Ok(entity::prayer_participant::Model)` - Created participant entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_participant(
    db: &DatabaseConnection,
    prayer_id: i32,
    member_id: impl Into<String>,
    kind: ParticipantKind,
) -> Result<entity::prayer_participant::Model, DbErr> {
    entity::prayer_participant::ActiveModel {
        prayer_id: ActiveValue::Set(prayer_id),
        member_id: ActiveValue::Set(member_id.into()),
        kind: ActiveValue::Set(kind),
    }
    .insert(db)
    .await
}

/// Adds a user participant to a prayer.
pub async fn create_user_participant(
    db: &DatabaseConnection,
    prayer_id: i32,
    member_id: impl Into<String>,
) -> Result<entity::prayer_participant::Model, DbErr> {
    create_participant(db, prayer_id, member_id, ParticipantKind::User).await
}

/// Adds a group participant to a prayer.
pub async fn create_group_participant(
    db: &DatabaseConnection,
    prayer_id: i32,
    member_id: impl Into<String>,
) -> Result<entity::prayer_participant::Model, DbErr> {
    create_participant(db, prayer_id, member_id, ParticipantKind::Group).await
}
