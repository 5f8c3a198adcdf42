use super::*;

/// Tests deleting a prayer.
///
/// Verifies that the repository removes the prayer record by its ID.
///
/// Expected: Ok with one row removed
#[tokio::test]
async fn deletes_prayer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::prayer::create_prayer(db, "user_1").await?;

    let repo = PrayerRepository::new(db);
    let removed = repo.delete(created.id).await?;

    assert_eq!(removed, 1);

    let check = entity::prelude::Prayer::find_by_id(created.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting an absent prayer is a no-op.
///
/// Expected: Ok with zero rows removed
#[tokio::test]
async fn deleting_absent_prayer_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrayerRepository::new(db);
    let removed = repo.delete(9999).await?;

    assert_eq!(removed, 0);

    Ok(())
}

/// Tests deleting a prayer cascades to participants and impressions.
///
/// Verifies that participant and impression rows are removed by the
/// foreign key CASCADE constraint.
///
/// Expected: Ok with all related rows deleted
#[tokio::test]
async fn cascades_to_participants_and_impressions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::prayer::create_prayer(db, "user_1").await?;
    factory::participant::create_user_participant(db, created.id, "user_2").await?;
    factory::impression::create_impression(db, created.id, "user_2").await?;

    let repo = PrayerRepository::new(db);
    repo.delete(created.id).await?;

    let participant_count = entity::prelude::PrayerParticipant::find()
        .filter(entity::prayer_participant::Column::PrayerId.eq(created.id))
        .count(db)
        .await?;
    assert_eq!(participant_count, 0);

    let impression_count = entity::prelude::Impression::find()
        .filter(entity::impression::Column::PrayerId.eq(created.id))
        .count(db)
        .await?;
    assert_eq!(impression_count, 0);

    Ok(())
}
