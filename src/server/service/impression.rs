use sea_orm::DatabaseConnection;

use crate::server::{
    data::impression::ImpressionRepository,
    error::AppError,
    model::impression::{CreateImpressionParams, Impression},
};

pub struct ImpressionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImpressionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an impression against a prayer.
    ///
    /// The impression row and the prayer's counter increment land in one
    /// transaction. Callers are responsible for checking that the prayer is
    /// still open before recording.
    ///
    /// # Returns
    /// - `Ok(Impression)`: The recorded impression
    /// - `Err(AppError)`: Database error
    pub async fn add(&self, params: CreateImpressionParams) -> Result<Impression, AppError> {
        let repo = ImpressionRepository::new(self.db);
        let impression = repo.add(params).await?;

        Ok(impression)
    }

    /// Gets all impressions for a prayer, oldest first.
    pub async fn list_for_prayer(&self, prayer_id: i32) -> Result<Vec<Impression>, AppError> {
        let repo = ImpressionRepository::new(self.db);
        let impressions = repo.get_by_prayer(prayer_id).await?;

        Ok(impressions)
    }
}
