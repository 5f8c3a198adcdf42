//! Impression factory for creating test impression entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test impressions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::impression::ImpressionFactory;
///
/// let impression = ImpressionFactory::new(&db, prayer.id, "user_123")
///     .content("Praying for you")
///     .build()
///     .await?;
/// ```
pub struct ImpressionFactory<'a> {
    db: &'a DatabaseConnection,
    prayer_id: i32,
    content: String,
    user_id: String,
}

impl<'a> ImpressionFactory<'a> {
    /// Creates a new ImpressionFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Impression {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `prayer_id` - ID of the prayer the impression belongs to
    /// - `user_id` - Identity of the impression author
    pub fn new(db: &'a DatabaseConnection, prayer_id: i32, user_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            prayer_id,
            content: format!("Impression {}", id),
            user_id: user_id.into(),
        }
    }

    /// Sets the impression content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the impression entity into the database.
    ///
    /// Note that this inserts the row directly and does not touch the parent
    /// prayer's `impression_count`; use the repository under test for that.
    ///
    /// # Returns
    /// - `Ok(entity::impression::Model)` - Created impression entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::impression::Model, DbErr> {
        entity::impression::ActiveModel {
            id: ActiveValue::NotSet,
            prayer_id: ActiveValue::Set(self.prayer_id),
            content: ActiveValue::Set(self.content),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an impression with default values for the specified prayer and author.
///
/// # Arguments
/// - `db` - Database connection
/// - `prayer_id` - ID of the prayer the impression belongs to
/// - `user_id` - Identity of the impression author
///
/// # Returns
/// - `Ok(entity::impression::Model)` - Created impression entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_impression(
    db: &DatabaseConnection,
    prayer_id: i32,
    user_id: impl Into<String>,
) -> Result<entity::impression::Model, DbErr> {
    ImpressionFactory::new(db, prayer_id, user_id).build().await
}
