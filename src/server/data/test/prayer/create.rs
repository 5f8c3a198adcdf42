use super::*;

/// Tests creating a prayer without participants.
///
/// Verifies that the repository creates the prayer record open, with zero
/// impressions, a creation timestamp, and no closed or updated timestamps.
///
/// Expected: Ok with prayer created
#[tokio::test]
async fn creates_prayer_without_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrayerRepository::new(db);
    let result = repo
        .create(CreatePrayerParams {
            title: "Test Prayer".to_string(),
            description: "A prayer for testing".to_string(),
            end_date_time: None,
            prayer_access: PrayerAccess::Public,
            prayer_type: PrayerType::Visible,
            creator_id: "user_1".to_string(),
            participants: Participants::default(),
        })
        .await;

    assert!(result.is_ok());
    let prayer = result.unwrap();
    assert_eq!(prayer.title, "Test Prayer");
    assert_eq!(prayer.creator_id, "user_1");
    assert!(prayer.is_open);
    assert_eq!(prayer.impression_count, 0);
    assert!(prayer.closed_at.is_none());
    assert!(prayer.updated_at.is_none());

    // Verify prayer exists in database
    let db_prayer = entity::prelude::Prayer::find_by_id(prayer.id).one(db).await?;
    assert!(db_prayer.is_some());
    assert_eq!(db_prayer.unwrap().title, "Test Prayer");

    Ok(())
}

/// Tests creating a prayer with initial participant sets.
///
/// Verifies that the repository creates participant rows for both users and
/// groups alongside the prayer record.
///
/// Expected: Ok with prayer and participant rows created
#[tokio::test]
async fn creates_prayer_with_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrayerRepository::new(db);
    let prayer = repo
        .create(CreatePrayerParams {
            title: "Test Prayer".to_string(),
            description: "A prayer for testing".to_string(),
            end_date_time: Some(Utc::now() + Duration::hours(2)),
            prayer_access: PrayerAccess::Private,
            prayer_type: PrayerType::Hidden,
            creator_id: "user_1".to_string(),
            participants: Participants {
                users: vec!["user_2".to_string(), "user_3".to_string()],
                groups: vec!["group_1".to_string()],
            },
        })
        .await?;

    assert_eq!(prayer.participants.users.len(), 2);
    assert_eq!(prayer.participants.groups.len(), 1);

    let row_count = entity::prelude::PrayerParticipant::find()
        .filter(entity::prayer_participant::Column::PrayerId.eq(prayer.id))
        .count(db)
        .await?;
    assert_eq!(row_count, 3);

    Ok(())
}

/// Tests creation rolls back the prayer row when the participant insert
/// fails.
///
/// Only the prayer table exists here, so the participant insert cannot
/// land; the enclosing transaction must take the prayer row down with it.
///
/// Expected: Err with no prayer row persisted
#[tokio::test]
async fn rolls_back_prayer_when_participant_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Prayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrayerRepository::new(db);
    let result = repo
        .create(CreatePrayerParams {
            title: "Test Prayer".to_string(),
            description: "A prayer for testing".to_string(),
            end_date_time: None,
            prayer_access: PrayerAccess::Public,
            prayer_type: PrayerType::Visible,
            creator_id: "user_1".to_string(),
            participants: Participants {
                users: vec!["user_2".to_string()],
                groups: vec![],
            },
        })
        .await;

    assert!(result.is_err());

    let count = entity::prelude::Prayer::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
