use super::*;

/// Tests listing all prayers in creation order.
///
/// Expected: Ok with every prayer returned, oldest first
#[tokio::test]
async fn lists_all_prayers_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::prayer::create_prayer(db, "user_1").await?;
    let second = factory::prayer::create_prayer(db, "user_2").await?;
    let third = factory::prayer::create_prayer(db, "user_1").await?;

    let repo = PrayerRepository::new(db);
    let prayers = repo.list(None).await?;

    assert_eq!(prayers.len(), 3);
    assert_eq!(prayers[0].id, first.id);
    assert_eq!(prayers[1].id, second.id);
    assert_eq!(prayers[2].id, third.id);

    Ok(())
}

/// Tests listing prayers filtered by prayer type.
///
/// Expected: Ok with only prayers of the requested type
#[tokio::test]
async fn filters_by_prayer_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::prayer::create_prayer(db, "user_1").await?;
    let hidden = factory::prayer::PrayerFactory::new(db, "user_1")
        .prayer_type(PrayerType::Hidden)
        .build()
        .await?;

    let repo = PrayerRepository::new(db);
    let prayers = repo.list(Some(PrayerType::Hidden)).await?;

    assert_eq!(prayers.len(), 1);
    assert_eq!(prayers[0].id, hidden.id);
    assert_eq!(prayers[0].prayer_type, PrayerType::Hidden);

    Ok(())
}

/// Tests listing attaches the right participant sets to each prayer.
///
/// Expected: Ok with participants mapped to their own prayer only
#[tokio::test]
async fn attaches_participants_to_each_prayer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::prayer::create_prayer(db, "user_1").await?;
    let second = factory::prayer::create_prayer(db, "user_2").await?;
    factory::participant::create_user_participant(db, first.id, "user_3").await?;
    factory::participant::create_group_participant(db, second.id, "group_1").await?;

    let repo = PrayerRepository::new(db);
    let prayers = repo.list(None).await?;

    assert_eq!(prayers[0].participants.users, vec!["user_3".to_string()]);
    assert!(prayers[0].participants.groups.is_empty());
    assert!(prayers[1].participants.users.is_empty());
    assert_eq!(prayers[1].participants.groups, vec!["group_1".to_string()]);

    Ok(())
}
