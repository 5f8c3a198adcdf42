use super::*;

/// Tests closing an open prayer.
///
/// Verifies that the guarded transition reports the prayer moved from open
/// to closed and stamps `closed_at`.
///
/// Expected: Ok(true) with prayer closed
#[tokio::test]
async fn closes_open_prayer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::prayer::create_prayer(db, "user_1").await?;

    let repo = PrayerRepository::new(db);
    let transitioned = repo.close(created.id).await?;

    assert!(transitioned);

    let db_prayer = entity::prelude::Prayer::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!db_prayer.is_open);
    assert!(db_prayer.closed_at.is_some());

    Ok(())
}

/// Tests closing an already closed prayer reports no transition.
///
/// The guard on `is_open` means a second close matches no rows, so callers
/// never fire close side effects twice.
///
/// Expected: Ok(false) with closed state unchanged
#[tokio::test]
async fn second_close_reports_no_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::prayer::create_prayer(db, "user_1").await?;

    let repo = PrayerRepository::new(db);
    assert!(repo.close(created.id).await?);
    assert!(!repo.close(created.id).await?);

    Ok(())
}

/// Tests closing a non-existent prayer.
///
/// Expected: Ok(false)
#[tokio::test]
async fn closing_missing_prayer_reports_no_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrayerRepository::new(db);
    let transitioned = repo.close(9999).await?;

    assert!(!transitioned);

    Ok(())
}
