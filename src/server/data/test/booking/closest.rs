use super::*;

/// Tests picking the last and next booking around now.
///
/// Verifies with bookings at -5..-4, -3..-2, +2..+3 and +4..+5 days that the last booking is the
/// one ending latest in the past and the next is the one starting soonest in the future.
///
/// Expected: last = -3..-2, next = +2..+3
#[tokio::test]
async fn picks_closest_past_and_future() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;

    BookingFactory::new(db, item.id, booker.id)
        .window_days(-5, -4)
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let last = BookingFactory::new(db, item.id, booker.id)
        .window_days(-3, -2)
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let next = BookingFactory::new(db, item.id, booker.id)
        .window_days(2, 3)
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .window_days(4, 5)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now();

    let last_by_item = repo.get_last_for_items(vec![item.id], now).await?;
    let next_by_item = repo.get_next_for_items(vec![item.id], now).await?;

    let found_last = last_by_item.get(&item.id).unwrap();
    assert_eq!(found_last.id, last.id);
    assert_eq!(found_last.booker_id, booker.id);
    assert_eq!(next_by_item.get(&item.id).unwrap().id, next.id);

    Ok(())
}

/// Tests that items without bookings on one side of now are absent from the maps.
///
/// Expected: no last booking for an item booked only in the future, nothing for an unbooked item
#[tokio::test]
async fn omits_items_without_candidates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = create_item_with_booker(db).await?;
    let unbooked = factory::create_item(db, owner.id).await?;
    factory::create_booking(db, item.id, booker.id).await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now();

    let last_by_item = repo
        .get_last_for_items(vec![item.id, unbooked.id], now)
        .await?;
    let next_by_item = repo
        .get_next_for_items(vec![item.id, unbooked.id], now)
        .await?;

    assert!(last_by_item.is_empty());
    assert_eq!(next_by_item.len(), 1);
    assert!(next_by_item.contains_key(&item.id));

    Ok(())
}

/// Tests that an ongoing booking counts as neither last nor next.
///
/// Expected: both maps empty
#[tokio::test]
async fn ignores_current_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .window_days(-1, 1)
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now();

    assert!(repo.get_last_for_items(vec![item.id], now).await?.is_empty());
    assert!(repo.get_next_for_items(vec![item.id], now).await?.is_empty());

    Ok(())
}

/// Tests the closest bookings across several items with a longer history each.
///
/// Verifies that each item gets its own last and next booking, unaffected by the bookings of
/// the other item or by older and later ones of its own.
///
/// Expected: per item, last = the booking ending latest before now, next = the one starting soonest
#[tokio::test]
async fn picks_closest_per_item_with_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first, booker) = create_item_with_booker(db).await?;
    let second = factory::create_item(db, owner.id).await?;

    for days in [-30, -20, -10] {
        BookingFactory::new(db, first.id, booker.id)
            .window_days(days, days + 1)
            .status(BookingStatus::Approved)
            .build()
            .await?;
    }
    let first_last = BookingFactory::new(db, first.id, booker.id)
        .window_days(-5, -4)
        .status(BookingStatus::Rejected)
        .build()
        .await?;
    let first_next = BookingFactory::new(db, first.id, booker.id)
        .window_days(3, 4)
        .build()
        .await?;
    BookingFactory::new(db, first.id, booker.id)
        .window_days(10, 11)
        .build()
        .await?;

    let second_last = BookingFactory::new(db, second.id, booker.id)
        .window_days(-2, -1)
        .status(BookingStatus::Approved)
        .build()
        .await?;
    BookingFactory::new(db, second.id, booker.id)
        .window_days(-15, -14)
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let second_next = BookingFactory::new(db, second.id, booker.id)
        .window_days(1, 2)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now();

    let last_by_item = repo
        .get_last_for_items(vec![first.id, second.id], now)
        .await?;
    let next_by_item = repo
        .get_next_for_items(vec![first.id, second.id], now)
        .await?;

    assert_eq!(last_by_item.len(), 2);
    assert_eq!(last_by_item.get(&first.id).unwrap().id, first_last.id);
    assert_eq!(last_by_item.get(&second.id).unwrap().id, second_last.id);
    assert_eq!(next_by_item.len(), 2);
    assert_eq!(next_by_item.get(&first.id).unwrap().id, first_next.id);
    assert_eq!(next_by_item.get(&second.id).unwrap().id, second_next.id);

    Ok(())
}
