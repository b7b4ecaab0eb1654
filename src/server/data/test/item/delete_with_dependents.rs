use super::*;

/// Tests deleting an item that has bookings and comments.
///
/// Expected: the item, its bookings and its comments are gone; other items are untouched
#[tokio::test]
async fn deletes_item_bookings_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let booker = factory::create_user(db).await?;
    let item = factory::create_item(db, owner.id).await?;
    let kept = factory::create_item(db, owner.id).await?;

    factory::create_booking(db, item.id, booker.id).await?;
    factory::create_comment(db, item.id, booker.id).await?;
    factory::create_booking(db, kept.id, booker.id).await?;

    ItemRepository::new(db).delete_with_dependents(item.id).await?;

    assert!(entity::prelude::Item::find_by_id(item.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Item::find_by_id(kept.id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}
