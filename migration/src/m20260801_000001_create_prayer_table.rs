use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prayer::Table)
                    .if_not_exists()
                    .col(pk_auto(Prayer::Id))
                    .col(string(Prayer::Title))
                    .col(text(Prayer::Description))
                    .col(timestamp_null(Prayer::EndDateTime))
                    .col(string_len(Prayer::PrayerAccess, 16))
                    .col(string(Prayer::CreatorId))
                    .col(string_len(Prayer::PrayerType, 16))
                    .col(
                        timestamp(Prayer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Prayer::UpdatedAt))
                    .col(timestamp_null(Prayer::ClosedAt))
                    .col(boolean(Prayer::IsOpen).default(true))
                    .col(integer(Prayer::ImpressionCount).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Prayer {
    Table,
    Id,
    Title,
    Description,
    EndDateTime,
    PrayerAccess,
    CreatorId,
    PrayerType,
    CreatedAt,
    UpdatedAt,
    ClosedAt,
    IsOpen,
    ImpressionCount,
}
