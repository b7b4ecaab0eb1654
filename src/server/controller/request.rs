use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        request::{CreateItemRequestDto, ItemRequestDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            pagination::Pagination,
            request::{CreateItemRequestParams, ItemRequestWithItems},
        },
        service::request::ItemRequestService,
        state::AppState,
    },
};

/// Tag for grouping item request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

/// Ask for an item nobody has listed yet.
#[utoipa::path(
    post,
    path = "/requests",
    tag = REQUEST_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")),
    request_body = CreateItemRequestDto,
    responses(
        (status = 201, description = "Created request", body = ItemRequestDto),
        (status = 400, description = "Blank description", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateItemRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    let params = CreateItemRequestParams::from_dto(payload)?;
    let request = ItemRequestService::new(&state.db)
        .create(&caller, params)
        .await?;

    tracing::info!("User {} created item request {}", caller.id, request.request.id);

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List the caller's own requests, newest first.
#[utoipa::path(
    get,
    path = "/requests",
    tag = REQUEST_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")),
    responses(
        (status = 200, description = "Requests made by the caller with their items", body = Vec<ItemRequestDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    let requests = ItemRequestService::new(&state.db)
        .find_all_for_current_user(&caller)
        .await?;

    let requests: Vec<ItemRequestDto> = requests
        .into_iter()
        .map(ItemRequestWithItems::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(requests)))
}

/// List requests made by other users, newest first.
#[utoipa::path(
    get,
    path = "/requests/all",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Requests made by other users with their items", body = Vec<ItemRequestDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_other_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;
    let pagination = Pagination::from_query(query.from, query.size)?;

    let requests = ItemRequestService::new(&state.db)
        .find_all_created_by_others(&caller, pagination)
        .await?;

    let requests: Vec<ItemRequestDto> = requests
        .into_iter()
        .map(ItemRequestWithItems::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(requests)))
}

#[utoipa::path(
    get,
    path = "/requests/{request_id}",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("request_id" = i32, Path, description = "Item request ID")
    ),
    responses(
        (status = 200, description = "The request with its items", body = ItemRequestDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers).require().await?;

    let request = ItemRequestService::new(&state.db)
        .find_by_id(request_id)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
