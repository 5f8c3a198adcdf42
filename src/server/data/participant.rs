use std::collections::HashMap;

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::prayer::Participants;

use entity::prayer_participant::{ActiveModel, Column, ParticipantKind};

pub struct ParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds users and groups to a prayer's participant sets.
    ///
    /// Idempotent set union: rows that already exist are skipped via
    /// `ON CONFLICT DO NOTHING` against the composite primary key, so adding
    /// the same member twice leaves a single row.
    ///
    /// # Arguments
    /// - `prayer_id`: ID of the prayer
    /// - `users`: User identities to add
    /// - `groups`: Group identities to add
    ///
    /// # Returns
    /// - `Ok(())`: Members present after the call
    /// - `Err(DbErr)`: Database error
    pub async fn add(
        &self,
        prayer_id: i32,
        users: &[String],
        groups: &[String],
    ) -> Result<(), DbErr> {
        Self::add_on(self.db, prayer_id, users, groups).await
    }

    /// Adds participant rows on the given connection.
    ///
    /// Takes any connection so the insert can join a caller's transaction,
    /// as prayer creation does.
    pub async fn add_on<C: ConnectionTrait>(
        conn: &C,
        prayer_id: i32,
        users: &[String],
        groups: &[String],
    ) -> Result<(), DbErr> {
        let models: Vec<ActiveModel> = users
            .iter()
            .map(|member_id| (member_id, ParticipantKind::User))
            .chain(
                groups
                    .iter()
                    .map(|member_id| (member_id, ParticipantKind::Group)),
            )
            .map(|(member_id, kind)| ActiveModel {
                prayer_id: ActiveValue::Set(prayer_id),
                member_id: ActiveValue::Set(member_id.clone()),
                kind: ActiveValue::Set(kind),
            })
            .collect();

        let result = entity::prelude::PrayerParticipant::insert_many(models)
            .on_conflict(
                OnConflict::columns([Column::PrayerId, Column::MemberId, Column::Kind])
                    .do_nothing()
                    .to_owned(),
            )
            .on_empty_do_nothing()
            .exec(conn)
            .await;

        match result {
            Ok(_) => Ok(()),
            // Every row conflicted; the sets already contain all members.
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Removes users and groups from a prayer's participant sets.
    ///
    /// Idempotent set difference: absent members are ignored.
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of participant rows removed
    /// - `Err(DbErr)`: Database error
    pub async fn remove(
        &self,
        prayer_id: i32,
        users: &[String],
        groups: &[String],
    ) -> Result<u64, DbErr> {
        let mut removed = 0;

        if !users.is_empty() {
            let result = entity::prelude::PrayerParticipant::delete_many()
                .filter(Column::PrayerId.eq(prayer_id))
                .filter(Column::Kind.eq(ParticipantKind::User))
                .filter(Column::MemberId.is_in(users.iter().cloned()))
                .exec(self.db)
                .await?;
            removed += result.rows_affected;
        }

        if !groups.is_empty() {
            let result = entity::prelude::PrayerParticipant::delete_many()
                .filter(Column::PrayerId.eq(prayer_id))
                .filter(Column::Kind.eq(ParticipantKind::Group))
                .filter(Column::MemberId.is_in(groups.iter().cloned()))
                .exec(self.db)
                .await?;
            removed += result.rows_affected;
        }

        Ok(removed)
    }

    /// Gets the participant sets for a single prayer.
    ///
    /// # Returns
    /// - `Ok(Participants)`: User and group sets (empty when none)
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_prayer(&self, prayer_id: i32) -> Result<Participants, DbErr> {
        let rows = entity::prelude::PrayerParticipant::find()
            .filter(Column::PrayerId.eq(prayer_id))
            .all(self.db)
            .await?;

        let mut participants = Participants::default();
        for row in rows {
            match row.kind {
                ParticipantKind::User => participants.users.push(row.member_id),
                ParticipantKind::Group => participants.groups.push(row.member_id),
            }
        }

        Ok(participants)
    }

    /// Gets the participant sets for a batch of prayers in one query.
    ///
    /// # Returns
    /// - `Ok(map)`: Prayer ID to participant sets; prayers without
    ///   participants are absent from the map
    /// - `Err(DbErr)`: Database error
    pub async fn get_for_prayers(&self, prayer_ids: &[i32]) -> Result<HashMap<i32, Participants>, DbErr> {
        if prayer_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::PrayerParticipant::find()
            .filter(Column::PrayerId.is_in(prayer_ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Participants> = HashMap::new();
        for row in rows {
            let participants = map.entry(row.prayer_id).or_default();
            match row.kind {
                ParticipantKind::User => participants.users.push(row.member_id),
                ParticipantKind::Group => participants.groups.push(row.member_id),
            }
        }

        Ok(map)
    }
}
