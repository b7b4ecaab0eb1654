use super::*;

/// Tests that the booker's bookings come back newest start first and only for that booker.
///
/// Expected: Ok(Vec) ordered by start descending, other bookers excluded
#[tokio::test]
async fn orders_by_start_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;
    let other = factory::create_user(db).await?;

    let early = BookingFactory::new(db, item.id, booker.id)
        .window_days(1, 2)
        .build()
        .await?;
    let late = BookingFactory::new(db, item.id, booker.id)
        .window_days(5, 6)
        .build()
        .await?;
    let past = BookingFactory::new(db, item.id, booker.id)
        .window_days(-6, -5)
        .build()
        .await?;
    BookingFactory::new(db, item.id, other.id).build().await?;

    let bookings = BookingRepository::new(db)
        .get_by_booker(booker.id, BookingState::All.condition(Utc::now()), None)
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![late.id, early.id, past.id]);

    Ok(())
}

/// Tests that CURRENT, PAST and FUTURE split ALL without overlap.
///
/// Expected: each booking appears in exactly one of the three states
#[tokio::test]
async fn time_states_partition_all() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;

    let past = BookingFactory::new(db, item.id, booker.id)
        .window_days(-3, -2)
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let current = BookingFactory::new(db, item.id, booker.id)
        .window_days(-1, 1)
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let future = BookingFactory::new(db, item.id, booker.id)
        .window_days(2, 3)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now();

    let mut ids_by_state = Vec::new();
    for state in [BookingState::Current, BookingState::Past, BookingState::Future] {
        let ids: Vec<i32> = repo
            .get_by_booker(booker.id, state.condition(now), None)
            .await?
            .into_iter()
            .map(|b| b.id)
            .collect();
        ids_by_state.push(ids);
    }

    assert_eq!(ids_by_state[0], vec![current.id]);
    assert_eq!(ids_by_state[1], vec![past.id]);
    assert_eq!(ids_by_state[2], vec![future.id]);

    let all = repo
        .get_by_booker(booker.id, BookingState::All.condition(now), None)
        .await?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests filtering on an exact status.
///
/// Expected: only WAITING bookings for `Waiting`, only REJECTED ones for `Rejected`
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;

    let waiting = BookingFactory::new(db, item.id, booker.id)
        .window_days(1, 2)
        .build()
        .await?;
    let rejected = BookingFactory::new(db, item.id, booker.id)
        .window_days(3, 4)
        .status(BookingStatus::Rejected)
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .window_days(5, 6)
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now();

    let result = repo
        .get_by_booker(booker.id, BookingState::Waiting.condition(now), None)
        .await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, waiting.id);

    let result = repo
        .get_by_booker(booker.id, BookingState::Rejected.condition(now), None)
        .await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, rejected.id);

    Ok(())
}

/// Tests offset paging: `from` skips rows, it is not a page number.
///
/// Expected: from=5, size=2 returns rows 5 and 6 of the full ordering
#[tokio::test]
async fn pages_by_row_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item, booker) = create_item_with_booker(db).await?;

    for day in 1..=8 {
        BookingFactory::new(db, item.id, booker.id)
            .window_days(day, day + 1)
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let now = Utc::now();

    let all = repo
        .get_by_booker(booker.id, BookingState::All.condition(now), None)
        .await?;
    let page = repo
        .get_by_booker(
            booker.id,
            BookingState::All.condition(now),
            Some(Pagination { from: 5, size: 2 }),
        )
        .await?;

    assert_eq!(all.len(), 8);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, all[5].id);
    assert_eq!(page[1].id, all[6].id);

    Ok(())
}
