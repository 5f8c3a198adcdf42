use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{
        impression::ImpressionService,
        notification::{NotificationEvent, NotificationService},
        prayer::PrayerService,
    },
};

use entity::prayer::PrayerType;

/// Starts the prayer auto-close scheduler.
///
/// The job runs every minute and closes prayers whose deadline has passed.
/// The scan is stateless: due deadlines are persisted on the prayer row, so
/// a restart loses nothing and the next tick picks up everything overdue.
///
/// # Arguments
/// - `db`: Database connection
/// - `notifier`: Notification dispatch for close events
pub async fn start_scheduler(
    db: DatabaseConnection,
    notifier: NotificationService,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_notifier = notifier.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let notifier = job_notifier.clone();

        Box::pin(async move {
            if let Err(e) = close_due_prayers(&db, &notifier).await {
                tracing::error!("Error closing due prayers: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Prayer auto-close scheduler started");

    Ok(())
}

/// Closes every open prayer whose deadline has passed.
///
/// Each due prayer goes through the same guarded close transition as an
/// explicit close, so a prayer closed by hand between the query and the
/// update emits nothing here. On transition the close notification fires,
/// and hidden prayers additionally reveal their accumulated impressions.
/// Errors are logged per prayer and never abort the scan.
///
/// # Returns
/// - `Ok(count)`: Number of prayers closed in this scan
/// - `Err(AppError)`: Database error while querying due prayers
pub async fn close_due_prayers(
    db: &DatabaseConnection,
    notifier: &NotificationService,
) -> Result<u64, AppError> {
    let now = Utc::now();

    let due = entity::prelude::Prayer::find()
        .filter(entity::prayer::Column::IsOpen.eq(true))
        .filter(entity::prayer::Column::EndDateTime.is_not_null())
        .filter(entity::prayer::Column::EndDateTime.lte(now))
        .all(db)
        .await?;

    let prayer_service = PrayerService::new(db);
    let mut closed = 0;

    for prayer in due {
        match prayer_service.close(prayer.id).await {
            Ok(true) => {
                closed += 1;
                tracing::info!("Auto-closed prayer {} ({})", prayer.id, prayer.title);

                notifier.notify(NotificationEvent::PrayerClosed {
                    prayer_id: prayer.id,
                    title: prayer.title.clone(),
                });

                if prayer.prayer_type == PrayerType::Hidden {
                    if let Err(e) = reveal_impressions(db, notifier, prayer.id).await {
                        tracing::error!(
                            "Error revealing impressions for prayer {}: {}",
                            prayer.id,
                            e
                        );
                    }
                }
            }
            // Closed by someone else since the query; nothing to emit.
            Ok(false) => {}
            Err(e) => {
                tracing::error!("Error closing prayer {}: {}", prayer.id, e);
            }
        }
    }

    Ok(closed)
}

/// Emits the reveal event carrying a hidden prayer's impressions.
async fn reveal_impressions(
    db: &DatabaseConnection,
    notifier: &NotificationService,
    prayer_id: i32,
) -> Result<(), AppError> {
    let impressions = ImpressionService::new(db).list_for_prayer(prayer_id).await?;

    notifier.notify(NotificationEvent::HiddenImpressionsRevealed {
        prayer_id,
        impressions: impressions.into_iter().map(Into::into).collect(),
    });

    Ok(())
}
