use super::*;

/// Tests recording an impression.
///
/// Verifies that the impression row is inserted and the parent prayer's
/// impression count is incremented in the same transaction.
///
/// Expected: Ok with impression created and count at 1
#[tokio::test]
async fn records_impression_and_increments_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let prayer = factory::prayer::create_prayer(db, "user_1").await?;

    let repo = ImpressionRepository::new(db);
    let impression = repo
        .add(CreateImpressionParams {
            prayer_id: prayer.id,
            content: "Praying for you".to_string(),
            user_id: "user_2".to_string(),
        })
        .await?;

    assert_eq!(impression.prayer_id, prayer.id);
    assert_eq!(impression.content, "Praying for you");
    assert_eq!(impression.user_id, "user_2");

    let db_prayer = entity::prelude::Prayer::find_by_id(prayer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_prayer.impression_count, 1);

    Ok(())
}

/// Tests the counter increments from its stored value.
///
/// Expected: Ok with count moved from 5 to 6
#[tokio::test]
async fn increments_existing_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let prayer = factory::prayer::PrayerFactory::new(db, "user_1")
        .impression_count(5)
        .build()
        .await?;

    let repo = ImpressionRepository::new(db);
    repo.add(CreateImpressionParams {
        prayer_id: prayer.id,
        content: "Praying".to_string(),
        user_id: "user_2".to_string(),
    })
    .await?;

    let db_prayer = entity::prelude::Prayer::find_by_id(prayer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_prayer.impression_count, 6);

    Ok(())
}

/// Tests recording an impression against a non-existent prayer.
///
/// The insert violates the foreign key constraint, so neither write lands.
///
/// Expected: Err with no impression rows created
#[tokio::test]
async fn rejects_impression_for_missing_prayer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImpressionRepository::new(db);
    let result = repo
        .add(CreateImpressionParams {
            prayer_id: 9999,
            content: "Praying".to_string(),
            user_id: "user_2".to_string(),
        })
        .await;

    assert!(result.is_err());

    let impressions = entity::prelude::Impression::find().all(db).await?;
    assert!(impressions.is_empty());

    Ok(())
}
