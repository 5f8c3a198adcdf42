//! Domain models for impression data operations.

use chrono::{DateTime, Utc};

use crate::model::impression::ImpressionDto;

/// An impression recorded against a prayer.
#[derive(Debug, Clone, PartialEq)]
pub struct Impression {
    /// Unique identifier for the impression.
    pub id: i32,
    /// ID of the prayer the impression belongs to.
    pub prayer_id: i32,
    /// The impression text.
    pub content: String,
    /// Identity of the author.
    pub user_id: String,
    /// Timestamp when the impression was recorded.
    pub created_at: DateTime<Utc>,
}

impl Impression {
    /// Converts an entity model to an impression domain model at the repository boundary.
    pub fn from_entity(entity: entity::impression::Model) -> Self {
        Self {
            id: entity.id,
            prayer_id: entity.prayer_id,
            content: entity.content,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }
}

impl From<Impression> for ImpressionDto {
    fn from(impression: Impression) -> Self {
        Self {
            id: impression.id,
            content: impression.content,
            user_id: impression.user_id,
            created_at: impression.created_at,
        }
    }
}

/// Parameters for recording a new impression.
#[derive(Debug, Clone)]
pub struct CreateImpressionParams {
    /// ID of the prayer the impression is recorded against.
    pub prayer_id: i32,
    /// The impression text.
    pub content: String,
    /// Identity of the author.
    pub user_id: String,
}
