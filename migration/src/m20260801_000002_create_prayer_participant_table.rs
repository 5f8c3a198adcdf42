use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_prayer_table::Prayer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrayerParticipant::Table)
                    .if_not_exists()
                    .col(integer(PrayerParticipant::PrayerId))
                    .col(string(PrayerParticipant::MemberId))
                    .col(string_len(PrayerParticipant::Kind, 8))
                    .primary_key(
                        Index::create()
                            .name("pk_prayer_participant")
                            .col(PrayerParticipant::PrayerId)
                            .col(PrayerParticipant::MemberId)
                            .col(PrayerParticipant::Kind),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prayer_participant_prayer_id")
                            .from(PrayerParticipant::Table, PrayerParticipant::PrayerId)
                            .to(Prayer::Table, Prayer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrayerParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PrayerParticipant {
    Table,
    PrayerId,
    MemberId,
    Kind,
}
