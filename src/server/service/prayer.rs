use sea_orm::DatabaseConnection;

use crate::{
    model::prayer::{ParticipantsDto, PrayerDto, PrayerViewDto, RedactedPrayerDto},
    server::{
        data::{participant::ParticipantRepository, prayer::PrayerRepository},
        error::AppError,
        model::prayer::{
            CreatePrayerParams, ParticipantChangeParams, Prayer, UpdatePrayerParams,
        },
    },
};

use entity::prayer::PrayerType;

pub struct PrayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new prayer with its initial participant sets.
    ///
    /// # Returns
    /// - `Ok(Prayer)`: The created prayer
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreatePrayerParams) -> Result<Prayer, AppError> {
        let repo = PrayerRepository::new(self.db);
        let prayer = repo.create(params).await?;

        Ok(prayer)
    }

    /// Gets a prayer by ID.
    ///
    /// # Returns
    /// - `Ok(Prayer)`: The prayer with participants loaded
    /// - `Err(AppError::NotFound)`: No prayer with this ID
    pub async fn get(&self, id: i32) -> Result<Prayer, AppError> {
        let repo = PrayerRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Prayer not found".to_string()))
    }

    /// Lists prayers, optionally filtered by prayer type.
    ///
    /// # Returns
    /// - `Ok(prayers)`: All matching prayers in creation order
    /// - `Err(AppError)`: Database error
    pub async fn list(&self, prayer_type: Option<PrayerType>) -> Result<Vec<Prayer>, AppError> {
        let repo = PrayerRepository::new(self.db);
        let prayers = repo.list(prayer_type).await?;

        Ok(prayers)
    }

    /// Patches a prayer with the supplied fields.
    ///
    /// # Returns
    /// - `Ok(Prayer)`: The updated prayer
    /// - `Err(AppError::NotFound)`: No prayer with this ID
    pub async fn update(&self, params: UpdatePrayerParams) -> Result<Prayer, AppError> {
        let repo = PrayerRepository::new(self.db);

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Prayer not found".to_string()))
    }

    /// Deletes a prayer and, by cascade, its participants and impressions.
    ///
    /// Deleting an absent prayer succeeds without effect.
    ///
    /// # Returns
    /// - `Ok(())`: The prayer no longer exists
    /// - `Err(AppError)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = PrayerRepository::new(self.db);
        repo.delete(id).await?;

        Ok(())
    }

    /// Closes a prayer through the guarded open-to-closed transition.
    ///
    /// # Returns
    /// - `Ok(true)`: The prayer was open and is now closed
    /// - `Ok(false)`: The prayer was already closed
    /// - `Err(AppError)`: Database error
    pub async fn close(&self, id: i32) -> Result<bool, AppError> {
        let repo = PrayerRepository::new(self.db);
        let transitioned = repo.close(id).await?;

        Ok(transitioned)
    }

    /// Adds users and groups to a prayer's participant sets (idempotent union).
    pub async fn add_participants(&self, params: ParticipantChangeParams) -> Result<(), AppError> {
        let repo = ParticipantRepository::new(self.db);
        repo.add(params.prayer_id, &params.users, &params.groups)
            .await?;

        Ok(())
    }

    /// Removes users and groups from a prayer's participant sets.
    pub async fn remove_participants(
        &self,
        params: ParticipantChangeParams,
    ) -> Result<(), AppError> {
        let repo = ParticipantRepository::new(self.db);
        repo.remove(params.prayer_id, &params.users, &params.groups)
            .await?;

        Ok(())
    }

    /// Converts a prayer to the complete wire representation.
    pub fn to_full_dto(prayer: Prayer) -> PrayerDto {
        PrayerDto {
            id: prayer.id,
            title: prayer.title,
            description: prayer.description,
            end_date_time: prayer.end_date_time,
            prayer_access: prayer.prayer_access.as_str().to_string(),
            creator_id: prayer.creator_id,
            participants: ParticipantsDto {
                users: prayer.participants.users,
                groups: prayer.participants.groups,
            },
            prayer_type: prayer.prayer_type.as_str().to_string(),
            created_at: prayer.created_at,
            updated_at: prayer.updated_at,
            closed_at: prayer.closed_at,
            is_open: prayer.is_open,
            impression_count: prayer.impression_count,
        }
    }

    /// Converts a prayer to the shape a reader may see.
    ///
    /// Hidden prayers that are still open expose only the redacted shape;
    /// everything else gets the complete record. Once a hidden prayer closes
    /// it is served in full.
    pub fn to_view_dto(prayer: Prayer) -> PrayerViewDto {
        if prayer.prayer_type == PrayerType::Hidden && prayer.is_open {
            PrayerViewDto::Redacted(RedactedPrayerDto {
                id: prayer.id,
                title: prayer.title,
                description: prayer.description,
                prayer_type: prayer.prayer_type.as_str().to_string(),
                impression_count: prayer.impression_count,
                is_open: prayer.is_open,
            })
        } else {
            PrayerViewDto::Full(Self::to_full_dto(prayer))
        }
    }
}
