use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Register a new user.
///
/// The email must not belong to another user.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 400, description = "Blank name or invalid email", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload)?;
    let user = UserService::new(&state.db).create(params).await?;

    tracing::info!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update the provided fields of a user.
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Blank name or invalid email", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateUserParams::from_dto(user_id, payload)?;
    let user = UserService::new(&state.db).update(params).await?;

    tracing::info!("Updated user {}", user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user with their items, bookings, comments and requests.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(user_id).await?;

    tracing::info!("Deleted user {}", user_id);

    Ok(StatusCode::NO_CONTENT)
}
