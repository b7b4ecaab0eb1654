use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Violations of the booking lifecycle rules.
#[derive(Error, Debug)]
pub enum BookingError {
    /// The item is flagged unavailable and cannot take new bookings.
    #[error("Item with id {item_id} is unavailable for booking")]
    ItemUnavailable { item_id: i32 },

    /// The caller tried to book an item they own.
    ///
    /// Reported as 404 so the response does not confirm ownership.
    #[error("Item with id {item_id} not found")]
    OwnItem { item_id: i32 },

    /// The booking already left `WAITING`.
    #[error("Status of booking with id {booking_id} can no longer be changed")]
    ImmutableStatus { booking_id: i32 },

    /// The caller is neither allowed to see nor to change the booking.
    ///
    /// Reported as 404 so the response does not confirm the booking exists.
    #[error("Booking with id {booking_id} not found")]
    AccessDenied { user_id: i32, booking_id: i32 },

    /// The `state` filter is not one of the known values.
    #[error("Unknown state: {0}")]
    UnknownState(String),
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::ItemUnavailable { .. }
            | Self::ImmutableStatus { .. }
            | Self::UnknownState(_) => StatusCode::BAD_REQUEST,
            Self::OwnItem { .. } => StatusCode::NOT_FOUND,
            Self::AccessDenied {
                user_id,
                booking_id,
            } => {
                tracing::debug!(
                    "User {} denied access to booking {}",
                    user_id,
                    booking_id
                );
                StatusCode::NOT_FOUND
            }
        };

        error_response(status, self.to_string())
    }
}
