use super::*;

/// Tests updating a prayer patches only the supplied fields.
///
/// Verifies that omitted optional fields keep their stored values while the
/// access modifier is always applied and `updated_at` is stamped.
///
/// Expected: Ok with title and access changed, description unchanged
#[tokio::test]
async fn patches_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::prayer::PrayerFactory::new(db, "user_1")
        .title("Original Title")
        .description("Original description")
        .build()
        .await?;

    let repo = PrayerRepository::new(db);
    let updated = repo
        .update(UpdatePrayerParams {
            id: created.id,
            title: Some("New Title".to_string()),
            description: None,
            end_date_time: None,
            prayer_access: PrayerAccess::Private,
            prayer_type: None,
        })
        .await?;

    assert!(updated.is_some());
    let prayer = updated.unwrap();
    assert_eq!(prayer.title, "New Title");
    assert_eq!(prayer.description, "Original description");
    assert_eq!(prayer.prayer_access, PrayerAccess::Private);
    assert!(prayer.updated_at.is_some());

    Ok(())
}

/// Tests updating a prayer never touches lifecycle fields.
///
/// Verifies that `is_open` and `impression_count` keep their stored values
/// through an update.
///
/// Expected: Ok with lifecycle state unchanged
#[tokio::test]
async fn leaves_lifecycle_fields_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::prayer::PrayerFactory::new(db, "user_1")
        .impression_count(3)
        .build()
        .await?;

    let repo = PrayerRepository::new(db);
    let updated = repo
        .update(UpdatePrayerParams {
            id: created.id,
            title: Some("New Title".to_string()),
            description: None,
            end_date_time: None,
            prayer_access: PrayerAccess::Public,
            prayer_type: Some(PrayerType::Hidden),
        })
        .await?
        .unwrap();

    assert!(updated.is_open);
    assert_eq!(updated.impression_count, 3);
    assert_eq!(updated.prayer_type, PrayerType::Hidden);

    Ok(())
}

/// Tests updating a non-existent prayer.
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
    let updated = repo
        .update(UpdatePrayerParams {
            id: 9999,
            title: Some("New Title".to_string()),
            description: None,
            end_date_time: None,
            prayer_access: PrayerAccess::Public,
            prayer_type: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
