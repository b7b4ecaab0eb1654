use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{item::ItemSummaryDto, user::UserDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatusDto {
    Waiting,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatusDto,
    pub booker: UserDto,
    pub item: ItemSummaryDto,
}

/// Booking as embedded into an item for its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingShortDto {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub booker_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub item_id: Option<i32>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}
