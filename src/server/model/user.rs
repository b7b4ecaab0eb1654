//! User domain models and parameters.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        util::validate::{require_email, require_not_blank},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Validated signup data.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
}

impl CreateUserParams {
    /// Validates a signup payload.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Name not blank, email of `local@domain` shape
    /// - `Err(AppError::BadRequest)` - Names the offending field
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_not_blank("name", dto.name)?,
            email: require_email(dto.email)?,
        })
    }
}

/// Partial user update; `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto
                .name
                .map(|name| require_not_blank("name", name))
                .transpose()?,
            email: dto.email.map(require_email).transpose()?,
        })
    }
}
