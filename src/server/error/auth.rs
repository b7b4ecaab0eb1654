use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Failures resolving the caller from the identity header.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The identity header was not sent.
    #[error("Missing X-Sharer-User-Id header")]
    MissingHeader,

    /// The identity header is present but is not a numeric user id.
    #[error("Malformed X-Sharer-User-Id header value '{0}'")]
    MalformedHeader(String),

    /// The identity header names a user that does not exist.
    #[error("User with id {0} not found")]
    UnknownUser(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingHeader` / `MalformedHeader` → 400 Bad Request
/// - `UnknownUser` → 404 Not Found
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let status = match self {
            Self::MissingHeader | Self::MalformedHeader(_) => StatusCode::BAD_REQUEST,
            Self::UnknownUser(_) => StatusCode::NOT_FOUND,
        };

        error_response(status, self.to_string())
    }
}
