use super::*;

/// Tests that a waiting booking moves to the requested status exactly once.
///
/// Expected: first call Ok(true), second call Ok(false), status stays APPROVED
#[tokio::test]
async fn transitions_only_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    let booking = factory::create_booking(db, item.id, booker.id).await?;

    let repo = BookingRepository::new(db);

    assert!(
        repo.transition_from_waiting(booking.id, BookingStatus::Approved)
            .await?
    );
    assert!(
        !repo
            .transition_from_waiting(booking.id, BookingStatus::Rejected)
            .await?
    );

    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Approved);

    Ok(())
}

/// Tests transitioning a booking that does not exist.
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

    let changed = BookingRepository::new(db)
        .transition_from_waiting(77, BookingStatus::Approved)
        .await?;

    assert!(!changed);

    Ok(())
}
