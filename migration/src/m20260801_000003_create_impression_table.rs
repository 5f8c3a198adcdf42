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
                    .table(Impression::Table)
                    .if_not_exists()
                    .col(pk_auto(Impression::Id))
                    .col(integer(Impression::PrayerId))
                    .col(text(Impression::Content))
                    .col(string(Impression::UserId))
                    .col(
                        timestamp(Impression::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_impression_prayer_id")
                            .from(Impression::Table, Impression::PrayerId)
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
            .drop_table(Table::drop().table(Impression::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Impression {
    Table,
    Id,
    PrayerId,
    Content,
    UserId,
    CreatedAt,
}
