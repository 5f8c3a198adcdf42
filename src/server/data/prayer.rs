use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::participant::ParticipantRepository,
    model::prayer::{CreatePrayerParams, Prayer, UpdatePrayerParams},
};

use entity::prayer::PrayerType;

pub struct PrayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new prayer together with its initial participant rows.
    ///
    /// The prayer starts open with zero impressions and a server-assigned
    /// creation timestamp. Both inserts run inside one transaction: a
    /// failing participant insert rolls the prayer row back, so a prayer
    /// never persists without its participant sets.
    ///
    /// # Arguments
    /// - `params` - Creation parameters including creator identity and
    ///   initial participant sets
    ///
    /// # Returns
    /// - `Ok(Prayer)`: The created prayer
    /// - `Err(DbErr)`: Database error; the transaction was rolled back
    pub async fn create(&self, params: CreatePrayerParams) -> Result<Prayer, DbErr> {
        let txn = self.db.begin().await?;

        let prayer = entity::prayer::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            end_date_time: ActiveValue::Set(params.end_date_time),
            prayer_access: ActiveValue::Set(params.prayer_access),
            creator_id: ActiveValue::Set(params.creator_id),
            prayer_type: ActiveValue::Set(params.prayer_type),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            closed_at: ActiveValue::Set(None),
            is_open: ActiveValue::Set(true),
            impression_count: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        ParticipantRepository::add_on(
            &txn,
            prayer.id,
            &params.participants.users,
            &params.participants.groups,
        )
        .await?;

        txn.commit().await?;

        Ok(Prayer::from_entity(prayer, params.participants))
    }

    /// Gets a prayer by ID with its participant sets.
    ///
    /// # Returns
    /// - `Ok(Some(Prayer))`: Prayer with participants loaded
    /// - `Ok(None)`: Prayer not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Prayer>, DbErr> {
        let prayer = entity::prelude::Prayer::find_by_id(id).one(self.db).await?;

        if let Some(prayer) = prayer {
            let participants = ParticipantRepository::new(self.db)
                .get_by_prayer(prayer.id)
                .await?;

            Ok(Some(Prayer::from_entity(prayer, participants)))
        } else {
            Ok(None)
        }
    }

    /// Lists all prayers, optionally filtered by prayer type.
    ///
    /// # Arguments
    /// - `prayer_type`: When given, only prayers of this type are returned
    ///
    /// # Returns
    /// - `Ok(prayers)`: Vector of prayers in creation order
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self, prayer_type: Option<PrayerType>) -> Result<Vec<Prayer>, DbErr> {
        let mut query = entity::prelude::Prayer::find().order_by_asc(entity::prayer::Column::Id);

        if let Some(prayer_type) = prayer_type {
            query = query.filter(entity::prayer::Column::PrayerType.eq(prayer_type));
        }

        let prayers = query.all(self.db).await?;

        let ids: Vec<i32> = prayers.iter().map(|p| p.id).collect();
        let mut participants = ParticipantRepository::new(self.db)
            .get_for_prayers(&ids)
            .await?;

        Ok(prayers
            .into_iter()
            .map(|prayer| {
                let sets = participants.remove(&prayer.id).unwrap_or_default();
                Prayer::from_entity(prayer, sets)
            })
            .collect())
    }

    /// Patches a prayer with the supplied fields and stamps `updated_at`.
    ///
    /// `is_open` and `impression_count` are never touched by an update.
    ///
    /// # Returns
    /// - `Ok(Some(Prayer))`: The updated prayer
    /// - `Ok(None)`: Prayer not found
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, params: UpdatePrayerParams) -> Result<Option<Prayer>, DbErr> {
        let Some(prayer) = entity::prelude::Prayer::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::prayer::ActiveModel = prayer.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(end_date_time) = params.end_date_time {
            active.end_date_time = ActiveValue::Set(Some(end_date_time));
        }
        active.prayer_access = ActiveValue::Set(params.prayer_access);
        if let Some(prayer_type) = params.prayer_type {
            active.prayer_type = ActiveValue::Set(prayer_type);
        }
        active.updated_at = ActiveValue::Set(Some(Utc::now()));

        let updated = active.update(self.db).await?;

        let participants = ParticipantRepository::new(self.db)
            .get_by_prayer(updated.id)
            .await?;

        Ok(Some(Prayer::from_entity(updated, participants)))
    }

    /// Deletes a prayer by ID.
    ///
    /// Participant and impression rows are removed by foreign key cascade.
    /// Deleting an absent prayer is a no-op.
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of prayer rows removed (0 or 1)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Prayer::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Closes a prayer if it is still open.
    ///
    /// The update is guarded on `is_open` so the open-to-closed transition
    /// happens at most once; callers use the returned flag to decide whether
    /// close side effects (notifications) should fire.
    ///
    /// # Returns
    /// - `Ok(true)`: The prayer was open and is now closed
    /// - `Ok(false)`: The prayer was already closed (or does not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn close(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Prayer::update_many()
            .set(entity::prayer::ActiveModel {
                is_open: ActiveValue::Set(false),
                closed_at: ActiveValue::Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(entity::prayer::Column::Id.eq(id))
            .filter(entity::prayer::Column::IsOpen.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
