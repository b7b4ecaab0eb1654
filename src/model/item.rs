use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::booking::BookingShortDto;

/// Item with comments, plus the closest bookings when viewed by its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i32,
    pub request_id: Option<i32>,
    pub last_booking: Option<BookingShortDto>,
    pub next_booking: Option<BookingShortDto>,
    pub comments: Vec<CommentDto>,
}

/// Item without bookings or comments, as embedded in bookings and requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i32,
    pub request_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateItemDto {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub text: String,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    #[serde(default)]
    pub text: String,
}
