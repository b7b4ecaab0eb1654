use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ItemError {
    /// A non-owner tried to change or delete the item.
    ///
    /// Reported as 404 so the response does not confirm the item exists for this caller.
    #[error("Item with id {item_id} not found")]
    AccessDenied { user_id: i32, item_id: i32 },

    /// The caller has no finished, approved booking of the item.
    #[error("User {user_id} is not allowed to comment on item {item_id}")]
    NotAllowedToComment { user_id: i32, item_id: i32 },
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AccessDenied { user_id, item_id } => {
                tracing::debug!("User {} denied access to item {}", user_id, item_id);
                StatusCode::NOT_FOUND
            }
            Self::NotAllowedToComment { .. } => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
