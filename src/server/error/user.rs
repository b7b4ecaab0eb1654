use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    /// Another user already registered this email.
    #[error("User with email {0} already exists")]
    EmailAlreadyExists(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::EmailAlreadyExists(_) => error_response(StatusCode::CONFLICT, self.to_string()),
        }
    }
}
