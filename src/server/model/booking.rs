//! Booking domain models, the state filter and booking parameters.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{ColumnTrait, Condition};

use crate::{
    model::booking::{BookingDto, BookingShortDto, BookingStatusDto, CreateBookingDto},
    server::{
        error::{booking::BookingError, AppError},
        model::{item::Item, pagination::Pagination, user::User},
    },
};

/// Booking with its item and booker resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub item: Item,
    pub booker: User,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model, item: Item, booker: User) -> Self {
        Self {
            id: entity.id,
            start: entity.start,
            end: entity.end,
            status: entity.status,
            item,
            booker,
        }
    }

    /// Whether `user_id` may see this booking: its booker or the owner of the item.
    pub fn is_visible_to(&self, user_id: i32) -> bool {
        self.booker.id == user_id || self.item.owner_id == user_id
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            start: self.start,
            end: self.end,
            status: status_into_dto(self.status),
            booker: self.booker.into_dto(),
            item: self.item.into_summary_dto(),
        }
    }
}

fn status_into_dto(status: BookingStatus) -> BookingStatusDto {
    match status {
        BookingStatus::Waiting => BookingStatusDto::Waiting,
        BookingStatus::Approved => BookingStatusDto::Approved,
        BookingStatus::Rejected => BookingStatusDto::Rejected,
    }
}

/// Booking as attached to an item for the item's owner (last/next booking).
#[derive(Debug, Clone, PartialEq)]
pub struct BookingShort {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub booker_id: i32,
}

impl BookingShort {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            start: entity.start,
            end: entity.end,
            booker_id: entity.booker_id,
        }
    }

    pub fn into_dto(self) -> BookingShortDto {
        BookingShortDto {
            id: self.id,
            start: self.start,
            end: self.end,
            booker_id: self.booker_id,
        }
    }
}

/// Listing filter over bookings.
///
/// The time-based variants are evaluated against the instant passed to `condition`, and
/// `Current`, `Past` and `Future` partition `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingState {
    #[default]
    All,
    /// `start <= now < end`
    Current,
    /// `end <= now`
    Past,
    /// `start > now`
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Query predicate selecting the bookings in this state at `now`.
    pub fn condition(self, now: DateTime<Utc>) -> Condition {
        use entity::booking::Column;

        match self {
            Self::All => Condition::all(),
            Self::Current => Condition::all()
                .add(Column::Start.lte(now))
                .add(Column::End.gt(now)),
            Self::Past => Condition::all().add(Column::End.lte(now)),
            Self::Future => Condition::all().add(Column::Start.gt(now)),
            Self::Waiting => Condition::all().add(Column::Status.eq(BookingStatus::Waiting)),
            Self::Rejected => Condition::all().add(Column::Status.eq(BookingStatus::Rejected)),
        }
    }
}

/// Parses the `state` query value case-insensitively.
impl FromStr for BookingState {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(BookingError::UnknownState(value.to_string())),
        }
    }
}

/// Validated booking request. The booker is the caller and the status is always `WAITING`.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub item_id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CreateBookingParams {
    /// Validates a booking payload against `now`.
    ///
    /// # Returns
    /// - `Ok(CreateBookingParams)` - All fields present, `now < start < end`
    /// - `Err(AppError::BadRequest)` - Missing field, window in the past or inverted
    pub fn from_dto(dto: CreateBookingDto, now: DateTime<Utc>) -> Result<Self, AppError> {
        let item_id = dto
            .item_id
            .ok_or_else(|| AppError::BadRequest("item_id must not be null".to_string()))?;
        let start = dto
            .start
            .ok_or_else(|| AppError::BadRequest("start must not be null".to_string()))?;
        let end = dto
            .end
            .ok_or_else(|| AppError::BadRequest("end must not be null".to_string()))?;

        if start <= now {
            return Err(AppError::BadRequest(format!(
                "start must be in the future, got {}",
                start
            )));
        }
        if end <= now {
            return Err(AppError::BadRequest(format!(
                "end must be in the future, got {}",
                end
            )));
        }
        if start >= end {
            return Err(AppError::BadRequest(format!(
                "start {} must be before end {}",
                start, end
            )));
        }

        Ok(Self {
            item_id,
            start,
            end,
        })
    }
}

/// Parameters for listing bookings of a booker or of an owner's items.
#[derive(Debug, Clone, Copy)]
pub struct ListBookingsParams {
    pub state: BookingState,
    pub pagination: Option<Pagination>,
}
