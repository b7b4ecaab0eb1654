//! Booking factory for creating test booking entities.
//!
//! Booking windows are expressed relative to the time the factory is created so tests can
//! place bookings in the past, present or future without hard-coding dates.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, item.id, booker.id)
///     .window_days(-5, -4)
///     .status(BookingStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start: 1 day from now
    /// - end: 2 days from now
    /// - status: `Waiting`
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            item_id,
            booker_id,
            start: now + Duration::days(1),
            end: now + Duration::days(2),
            status: BookingStatus::Waiting,
        }
    }

    /// Sets an absolute booking window.
    pub fn window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the booking window as day offsets from now; negative offsets lie in the past.
    pub fn window_days(self, start_days: i64, end_days: i64) -> Self {
        let now = Utc::now();
        self.window(
            now + Duration::days(start_days),
            now + Duration::days(end_days),
        )
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a waiting booking starting tomorrow.
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}
