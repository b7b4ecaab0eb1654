use super::*;

/// Tests deleting a user that owns, books, comments and requests.
///
/// Verifies that every row referencing the user is removed, and that items answering the
/// user's requests survive with their link cleared.
///
/// Expected: Ok(true), only the other user's unrelated rows remain
#[tokio::test]
async fn removes_all_dependent_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    // rows the user created on someone else's item
    let other_item = factory::create_item(db, other.id).await?;
    factory::create_booking(db, other_item.id, user.id).await?;
    factory::create_comment(db, other_item.id, user.id).await?;

    // rows someone else created on the user's item
    let own_item = factory::create_item(db, user.id).await?;
    factory::create_booking(db, own_item.id, other.id).await?;
    factory::create_comment(db, own_item.id, other.id).await?;

    // another user's item answering the user's request
    let request = factory::create_item_request(db, user.id).await?;
    let answer = ItemFactory::new(db, other.id)
        .request_id(request.id)
        .build()
        .await?;

    let deleted = UserRepository::new(db).delete_with_dependents(user.id).await?;

    assert!(deleted);
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ItemRequest::find().count(db).await?, 0);
    assert!(entity::prelude::Item::find_by_id(own_item.id)
        .one(db)
        .await?
        .is_none());

    let answer = entity::prelude::Item::find_by_id(answer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(answer.request_id, None);
    assert_eq!(answer.owner_id, other.id);

    Ok(())
}

/// Tests deleting a user id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete_with_dependents(12).await?;

    assert!(!deleted);

    Ok(())
}
