use super::*;

/// Tests creating a booking.
///
/// Verifies that the stored booking starts in WAITING and comes back with its item and booker
/// loaded.
///
/// Expected: Ok(Booking) with status Waiting
#[tokio::test]
async fn creates_waiting_booking_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = create_item_with_booker(db).await?;
    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::hours(6);

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(
            booker.id,
            CreateBookingParams {
                item_id: item.id,
                start,
                end,
            },
        )
        .await?;

    assert_eq!(booking.status, BookingStatus::Waiting);
    assert_eq!(booking.start, start);
    assert_eq!(booking.end, end);
    assert_eq!(booking.item.id, item.id);
    assert_eq!(booking.item.owner_id, owner.id);
    assert_eq!(booking.booker.id, booker.id);

    let found = repo.find_by_id(booking.id).await?;
    assert_eq!(found, Some(booking));

    Ok(())
}

/// Tests booking an item that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booker = factory::create_user(db).await?;
    let start = Utc::now() + Duration::days(1);

    let result = BookingRepository::new(db)
        .create(
            booker.id,
            CreateBookingParams {
                item_id: 9999,
                start,
                end: start + Duration::days(1),
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking up a booking id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingRepository::new(db).find_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
