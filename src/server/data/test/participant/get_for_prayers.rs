use super::*;

/// Tests batch loading participant sets for several prayers.
///
/// Expected: Ok with each prayer's members under its own key and prayers
/// without participants absent from the map
#[tokio::test]
async fn batches_participants_by_prayer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::prayer::create_prayer(db, "user_1").await?;
    let second = factory::prayer::create_prayer(db, "user_1").await?;
    let empty = factory::prayer::create_prayer(db, "user_1").await?;

    factory::participant::create_user_participant(db, first.id, "user_2").await?;
    factory::participant::create_group_participant(db, second.id, "group_1").await?;

    let repo = ParticipantRepository::new(db);
    let map = repo.get_for_prayers(&[first.id, second.id, empty.id]).await?;

    assert_eq!(map.len(), 2);
    assert_eq!(map[&first.id].users, vec!["user_2".to_string()]);
    assert_eq!(map[&second.id].groups, vec!["group_1".to_string()]);
    assert!(!map.contains_key(&empty.id));

    Ok(())
}

/// Tests batch loading with no prayer IDs.
///
/// Expected: Ok with empty map and no query issued
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParticipantRepository::new(db);
    let map = repo.get_for_prayers(&[]).await?;

    assert!(map.is_empty());

    Ok(())
}
