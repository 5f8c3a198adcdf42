use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Participant sets attached to a prayer, split into users and groups.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct ParticipantsDto {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrayerDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub end_date_time: Option<DateTime<Utc>>,
    pub prayer_access: String,
    #[serde(default)]
    pub participants: Option<ParticipantsDto>,
    pub prayer_type: String,
}

/// Body of `PUT /api/prayers/{id}`.
///
/// `prayer_access` is required on every update; the remaining fields patch
/// the record only when supplied.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrayerDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub end_date_time: Option<DateTime<Utc>>,
    pub prayer_access: String,
    #[serde(default)]
    pub prayer_type: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantChangeDto {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

/// The complete prayer record as exposed to readers allowed to see it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PrayerDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<Utc>>,
    pub prayer_access: String,
    pub creator_id: String,
    pub participants: ParticipantsDto,
    pub prayer_type: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    pub is_open: bool,
    pub impression_count: i32,
}

/// The reduced shape returned for hidden prayers that are still open.
///
/// Exactly these six fields are exposed; participants, creator, access and
/// all timestamps stay withheld until the prayer closes.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RedactedPrayerDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub prayer_type: String,
    pub impression_count: i32,
    pub is_open: bool,
}

/// A prayer as seen by a reader: either the full record or the redacted
/// shape, depending on the hidden/open visibility rule.
///
/// `Full` must stay first so untagged deserialization prefers the complete
/// shape and only falls back to `Redacted` when fields are missing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(untagged)]
pub enum PrayerViewDto {
    Full(PrayerDto),
    Redacted(RedactedPrayerDto),
}
