use super::*;

/// Tests collecting the items that answer a set of requests.
///
/// Expected: Ok(Vec) with only the items linked to the given requests
#[tokio::test]
async fn returns_items_linked_to_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requestor = factory::create_user(db).await?;
    let owner = factory::create_user(db).await?;
    let request = factory::create_item_request(db, requestor.id).await?;
    let other_request = factory::create_item_request(db, requestor.id).await?;

    let answer = ItemFactory::new(db, owner.id)
        .request_id(request.id)
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .request_id(other_request.id)
        .build()
        .await?;
    factory::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db)
        .get_by_request_ids(vec![request.id])
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, answer.id);
    assert_eq!(items[0].request_id, Some(request.id));

    Ok(())
}

/// Tests that no request ids yields no items.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let items = ItemRepository::new(db).get_by_request_ids(Vec::new()).await?;

    assert!(items.is_empty());

    Ok(())
}
