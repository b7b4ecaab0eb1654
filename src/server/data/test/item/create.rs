use super::*;

/// Tests creating an item owned by the given user.
///
/// Expected: Ok(Item) with the requested fields and owner
#[tokio::test]
async fn creates_item_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let request = factory::create_item_request(db, owner.id).await?;

    let item = ItemRepository::new(db)
        .create(
            owner.id,
            CreateItemParams {
                name: "Drill".to_string(),
                description: "Cordless drill".to_string(),
                available: true,
                request_id: Some(request.id),
            },
        )
        .await?;

    assert_eq!(item.name, "Drill");
    assert_eq!(item.description, "Cordless drill");
    assert!(item.available);
    assert_eq!(item.owner_id, owner.id);
    assert_eq!(item.request_id, Some(request.id));

    let found = ItemRepository::new(db).find_by_id(item.id).await?;
    assert_eq!(found, Some(item));

    Ok(())
}
