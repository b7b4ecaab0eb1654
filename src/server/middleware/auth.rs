use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Header carrying the caller's user id, `X-Sharer-User-Id` on the wire.
pub const USER_ID_HEADER: &str = "x-sharer-user-id";

/// Resolves the caller from the identity header of a request.
///
/// Fails closed: a missing, non-numeric or unknown id never yields a user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Returns the user named by the identity header.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller
    /// - `Err(AuthError::MissingHeader)` - Header absent
    /// - `Err(AuthError::MalformedHeader)` - Header is not a valid integer id
    /// - `Err(AuthError::UnknownUser)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(value) = self.headers.get(USER_ID_HEADER) else {
            return Err(AuthError::MissingHeader.into());
        };

        let raw = value.to_str().map_err(|_| {
            AuthError::MalformedHeader(String::from_utf8_lossy(value.as_bytes()).into_owned())
        })?;

        let user_id = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| AuthError::MalformedHeader(raw.to_string()))?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UnknownUser(user_id).into());
        };

        Ok(user)
    }
}
