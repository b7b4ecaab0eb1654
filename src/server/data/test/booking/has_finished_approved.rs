use super::*;

/// Tests that a finished approved booking makes the booker eligible.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_for_finished_approved_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .window_days(-3, -2)
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let eligible = BookingRepository::new(db)
        .has_finished_approved(booker.id, item.id, Utc::now())
        .await?;

    assert!(eligible);

    Ok(())
}

/// Tests bookings that do not qualify: rejected, still running, or made by someone else.
///
/// Expected: Ok(false) for each
#[tokio::test]
async fn false_for_non_qualifying_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item, booker) = create_item_with_booker(db).await?;
    let other = factory::create_user(db).await?;

    BookingFactory::new(db, item.id, booker.id)
        .window_days(-3, -2)
        .status(BookingStatus::Rejected)
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .window_days(-1, 1)
        .status(BookingStatus::Approved)
        .build()
        .await?;
    BookingFactory::new(db, item.id, other.id)
        .window_days(-5, -4)
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now();

    assert!(!repo.has_finished_approved(booker.id, item.id, now).await?);
    assert!(!repo.has_finished_approved(owner.id, item.id, now).await?);

    Ok(())
}

/// Tests that a finished booking still awaiting the owner's decision does not qualify.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_finished_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .window_days(-4, -3)
        .status(BookingStatus::Waiting)
        .build()
        .await?;

    let eligible = BookingRepository::new(db)
        .has_finished_approved(booker.id, item.id, Utc::now())
        .await?;

    assert!(!eligible);

    Ok(())
}
