use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Signup payload. Missing fields deserialize as empty strings and fail validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
}
