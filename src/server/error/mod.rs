//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. Domain errors
//! (`AuthError`, `BookingError`, `ItemError`, `UserError`) carry their own status code mapping
//! and are wrapped by `AppError` through `#[from]` conversions, so `?` works across layers.

pub mod auth;
pub mod booking;
pub mod config;
pub mod item;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, booking::BookingError, config::ConfigError, item::ItemError,
        user::UserError,
    },
};

/// Top-level application error type.
///
/// Domain variants delegate to their own `IntoResponse` implementation. Infrastructure
/// failures (database, IO, configuration) are logged and returned as a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Identity header missing, malformed or naming an unknown user.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Booking state machine rule violated.
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Item ownership or comment eligibility rule violated.
    #[error(transparent)]
    ItemErr(#[from] ItemError),

    /// User account rule violated.
    #[error(transparent)]
    UserErr(#[from] UserError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or runtime IO error, only expected while binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Requested entity does not exist.
    ///
    /// Results in 404 Not Found with the provided message, which names the entity type and id.
    #[error("{0}")]
    NotFound(String),

    /// Request input failed validation.
    ///
    /// Results in 400 Bad Request with a message naming the offending field or value.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Builds a `NotFound` error naming the entity type and id.
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{} with id {} not found", entity, id))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - Variable - For domain errors, delegated to their own `into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::ItemErr(err) => err.into_response(),
            Self::UserErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
