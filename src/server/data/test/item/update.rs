use super::*;

/// Tests a partial update.
///
/// Expected: only the provided field changes
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let item = ItemFactory::new(db, owner.id)
        .name("Tent")
        .description("Two person tent")
        .build()
        .await?;

    let updated = ItemRepository::new(db)
        .update(UpdateItemParams {
            id: item.id,
            name: None,
            description: None,
            available: Some(false),
        })
        .await?;

    assert_eq!(updated.name, "Tent");
    assert_eq!(updated.description, "Two person tent");
    assert!(!updated.available);

    Ok(())
}

/// Tests updating an item that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ItemRepository::new(db)
        .update(UpdateItemParams {
            id: 404,
            name: Some("Nothing".to_string()),
            description: None,
            available: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
