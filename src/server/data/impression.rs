use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::impression::{CreateImpressionParams, Impression};

pub struct ImpressionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImpressionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an impression and increments the prayer's impression count.
    ///
    /// Both writes happen inside a single transaction: either the impression
    /// row exists and the counter moved by exactly one, or neither happened.
    /// The increment is expressed against the stored value so concurrent
    /// additions cannot lose updates.
    ///
    /// # Arguments
    /// - `params`: Prayer ID, author identity, and content
    ///
    /// # Returns
    /// - `Ok(Impression)`: The recorded impression
    /// - `Err(DbErr)`: Database error; the transaction was rolled back
    pub async fn add(&self, params: CreateImpressionParams) -> Result<Impression, DbErr> {
        let txn = self.db.begin().await?;

        let impression = entity::impression::ActiveModel {
            prayer_id: ActiveValue::Set(params.prayer_id),
            content: ActiveValue::Set(params.content),
            user_id: ActiveValue::Set(params.user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::prelude::Prayer::update_many()
            .col_expr(
                entity::prayer::Column::ImpressionCount,
                Expr::col(entity::prayer::Column::ImpressionCount).add(1),
            )
            .filter(entity::prayer::Column::Id.eq(params.prayer_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Impression::from_entity(impression))
    }

    /// Gets all impressions for a prayer in submission order.
    ///
    /// # Returns
    /// - `Ok(impressions)`: Vector of impressions, oldest first
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_prayer(&self, prayer_id: i32) -> Result<Vec<Impression>, DbErr> {
        let impressions = entity::prelude::Impression::find()
            .filter(entity::impression::Column::PrayerId.eq(prayer_id))
            .order_by_asc(entity::impression::Column::Id)
            .all(self.db)
            .await?;

        Ok(impressions.into_iter().map(Impression::from_entity).collect())
    }
}
