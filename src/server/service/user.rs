//! User service for account management.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{user::UserError, AppError},
    model::user::{CreateUserParams, UpdateUserParams, User},
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(UserError::EmailAlreadyExists)` - Email taken, including by a concurrent signup
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(UserError::EmailAlreadyExists(params.email).into());
        }

        let email = params.email.clone();
        user_repo
            .create(params)
            .await
            .map_err(|err| map_unique_violation(err, email))
    }

    /// Updates the provided fields of a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(UserError::EmailAlreadyExists)` - New email belongs to another user
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::not_found("User", params.id));
        }

        if let Some(email) = &params.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != params.id {
                    return Err(UserError::EmailAlreadyExists(email.clone()).into());
                }
            }
        }

        let email = params.email.clone().unwrap_or_default();
        user_repo
            .update(params)
            .await
            .map_err(|err| map_unique_violation(err, email))
    }

    /// Deletes a user and every row that depends on them.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db)
            .delete_with_dependents(id)
            .await?;

        if !deleted {
            return Err(AppError::not_found("User", id));
        }

        Ok(())
    }
}

/// Turns a unique violation on insert/update into `EmailAlreadyExists`.
fn map_unique_violation(err: DbErr, email: String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::EmailAlreadyExists(email).into(),
        _ => err.into(),
    }
}
