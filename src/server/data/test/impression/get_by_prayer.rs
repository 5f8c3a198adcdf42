use super::*;

/// Tests getting the impressions of a prayer in submission order.
///
/// Expected: Ok with impressions oldest first, other prayers excluded
#[tokio::test]
async fn returns_impressions_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let prayer = factory::prayer::create_prayer(db, "user_1").await?;
    let other = factory::prayer::create_prayer(db, "user_1").await?;

    let first = factory::impression::create_impression(db, prayer.id, "user_2").await?;
    let second = factory::impression::create_impression(db, prayer.id, "user_3").await?;
    factory::impression::create_impression(db, other.id, "user_4").await?;

    let repo = ImpressionRepository::new(db);
    let impressions = repo.get_by_prayer(prayer.id).await?;

    assert_eq!(impressions.len(), 2);
    assert_eq!(impressions[0].id, first.id);
    assert_eq!(impressions[1].id, second.id);

    Ok(())
}

/// Tests getting impressions for a prayer without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_prayer_without_impressions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prayer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let prayer = factory::prayer::create_prayer(db, "user_1").await?;

    let repo = ImpressionRepository::new(db);
    let impressions = repo.get_by_prayer(prayer.id).await?;

    assert!(impressions.is_empty());

    Ok(())
}
