//! Domain models for prayer data operations.

use chrono::{DateTime, Utc};
use entity::prayer::{PrayerAccess, PrayerType};

/// Participant sets attached to a prayer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Participants {
    /// User identities participating in the prayer.
    pub users: Vec<String>,
    /// Group identities participating in the prayer.
    pub groups: Vec<String>,
}

/// A prayer request with its lifecycle state and participant sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Prayer {
    /// Unique identifier for the prayer.
    pub id: i32,
    /// Short title shown in listings.
    pub title: String,
    /// Free-form description of the request.
    pub description: String,
    /// Optional deadline after which the prayer is closed automatically.
    pub end_date_time: Option<DateTime<Utc>>,
    /// Access modifier (private or public).
    pub prayer_access: PrayerAccess,
    /// Identity of the creator. Immutable after creation; creator-only
    /// mutations compare against this field.
    pub creator_id: String,
    /// Participating users and groups.
    pub participants: Participants,
    /// Visibility type (hidden or visible).
    pub prayer_type: PrayerType,
    /// Timestamp when the prayer was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last field patch, if any.
    pub updated_at: Option<DateTime<Utc>>,
    /// Timestamp when the prayer was closed, if it has been.
    pub closed_at: Option<DateTime<Utc>>,
    /// Whether the prayer still accepts impressions.
    pub is_open: bool,
    /// Number of impressions ever added. Maintained by an atomic increment
    /// co-located with impression insertion; never decremented.
    pub impression_count: i32,
}

impl Prayer {
    /// Converts an entity model to a prayer domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `participants` - Participant sets loaded alongside the prayer row
    ///
    /// # Returns
    /// - `Prayer` - The converted prayer domain model
    pub fn from_entity(entity: entity::prayer::Model, participants: Participants) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            end_date_time: entity.end_date_time,
            prayer_access: entity.prayer_access,
            creator_id: entity.creator_id,
            participants,
            prayer_type: entity.prayer_type,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            closed_at: entity.closed_at,
            is_open: entity.is_open,
            impression_count: entity.impression_count,
        }
    }
}

/// Parameters for creating a new prayer.
///
/// The prayer is created open with zero impressions and a server-assigned
/// creation timestamp.
#[derive(Debug, Clone)]
pub struct CreatePrayerParams {
    pub title: String,
    pub description: String,
    /// Optional auto-close deadline.
    pub end_date_time: Option<DateTime<Utc>>,
    pub prayer_access: PrayerAccess,
    pub prayer_type: PrayerType,
    /// Identity of the authenticated creator.
    pub creator_id: String,
    /// Initial participant sets, possibly empty.
    pub participants: Participants,
}

/// Parameters for patching an existing prayer.
///
/// `prayer_access` is always applied; the optional fields patch the record
/// only when supplied. `is_open` and `impression_count` are never touched by
/// an update.
#[derive(Debug, Clone)]
pub struct UpdatePrayerParams {
    /// ID of the prayer to update.
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub prayer_access: PrayerAccess,
    pub prayer_type: Option<PrayerType>,
}

/// Parameters for adding or removing participants on a prayer.
#[derive(Debug, Clone)]
pub struct ParticipantChangeParams {
    pub prayer_id: i32,
    pub users: Vec<String>,
    pub groups: Vec<String>,
}
