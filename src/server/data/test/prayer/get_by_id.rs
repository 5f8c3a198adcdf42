use super::*;

/// Tests getting a prayer by ID with its participant sets.
///
/// Verifies that the repository loads the prayer record together with its
/// user and group participants.
///
/// Expected: Ok with prayer and participants returned
#[tokio::test]
async fn gets_prayer_with_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::prayer::create_prayer(db, "user_1").await?;
    factory::participant::create_user_participant(db, created.id, "user_2").await?;
    factory::participant::create_group_participant(db, created.id, "group_1").await?;

    let repo = PrayerRepository::new(db);
    let prayer = repo.get_by_id(created.id).await?;

    assert!(prayer.is_some());
    let prayer = prayer.unwrap();
    assert_eq!(prayer.id, created.id);
    assert_eq!(prayer.participants.users, vec!["user_2".to_string()]);
    assert_eq!(prayer.participants.groups, vec!["group_1".to_string()]);

    Ok(())
}

/// Tests getting a non-existent prayer.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_prayer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrayerRepository::new(db);
    let prayer = repo.get_by_id(9999).await?;

    assert!(prayer.is_none());

    Ok(())
}
