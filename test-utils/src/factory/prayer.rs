//! Prayer factory for creating test prayer entities.
//!
//! This module provides factory methods for creating prayer entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::prayer::{PrayerAccess, PrayerType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test prayers with customizable fields.
///
/// Provides a builder pattern for creating prayer entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::prayer::PrayerFactory;
///
/// let prayer = PrayerFactory::new(&db, "user_123")
///     .title("Custom Prayer")
///     .prayer_type(PrayerType::Hidden)
///     .build()
///     .await?;
/// ```
pub struct PrayerFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    end_date_time: Option<chrono::DateTime<Utc>>,
    prayer_access: PrayerAccess,
    creator_id: String,
    prayer_type: PrayerType,
    is_open: bool,
    closed_at: Option<chrono::DateTime<Utc>>,
    impression_count: i32,
}

impl<'a> PrayerFactory<'a> {
    /// Creates a new PrayerFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Prayer {id}"` where id is auto-incremented
    /// - description: `"Test prayer description"`
    /// - end_date_time: `None`
    /// - prayer_access: `Public`
    /// - prayer_type: `Visible`
    /// - is_open: `true`
    /// - impression_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `creator_id` - Identity of the prayer creator
    ///
    /// # Returns
    /// - `PrayerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, creator_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Prayer {}", id),
            description: "Test prayer description".to_string(),
            end_date_time: None,
            prayer_access: PrayerAccess::Public,
            creator_id: creator_id.into(),
            prayer_type: PrayerType::Visible,
            is_open: true,
            closed_at: None,
            impression_count: 0,
        }
    }

    /// Sets the prayer title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the prayer description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the auto-close deadline.
    pub fn end_date_time(mut self, end_date_time: Option<chrono::DateTime<Utc>>) -> Self {
        self.end_date_time = end_date_time;
        self
    }

    /// Sets the access modifier.
    pub fn prayer_access(mut self, prayer_access: PrayerAccess) -> Self {
        self.prayer_access = prayer_access;
        self
    }

    /// Sets the prayer type.
    pub fn prayer_type(mut self, prayer_type: PrayerType) -> Self {
        self.prayer_type = prayer_type;
        self
    }

    /// Sets whether the prayer is open. When set to `false` a `closed_at`
    /// timestamp is stamped as well.
    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self.closed_at = if is_open { None } else { Some(Utc::now()) };
        self
    }

    /// Sets the stored impression count.
    pub fn impression_count(mut self, impression_count: i32) -> Self {
        self.impression_count = impression_count;
        self
    }

    /// Builds and inserts the prayer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::prayer::Model)` - Created prayer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::prayer::Model, DbErr> {
        entity::prayer::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            end_date_time: ActiveValue::Set(self.end_date_time),
            prayer_access: ActiveValue::Set(self.prayer_access),
            creator_id: ActiveValue::Set(self.creator_id),
            prayer_type: ActiveValue::Set(self.prayer_type),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            closed_at: ActiveValue::Set(self.closed_at),
            is_open: ActiveValue::Set(self.is_open),
            impression_count: ActiveValue::Set(self.impression_count),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a prayer with default values for the specified creator.
///
/// Shorthand for `PrayerFactory::new(db, creator_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `creator_id` - Identity of the prayer creator
///
/// # Returns
/// - `Ok(entity::prayer::Model)` - Created prayer entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_prayer(
    db: &DatabaseConnection,
    creator_id: impl Into<String>,
) -> Result<entity::prayer::Model, DbErr> {
    PrayerFactory::new(db, creator_id).build().await
}
