use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        item::{CommentDto, CreateCommentDto, CreateItemDto, ItemDto, ItemSummaryDto, UpdateItemDto},
    },
    server::{
        controller::param::{PaginationParam, SearchParam},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            comment::CreateCommentParams,
            item::{CreateItemParams, Item, ItemDetails, UpdateItemParams},
            pagination::Pagination,
        },
        service::item::ItemService,
        state::AppState,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// List the caller's available items with closest bookings and comments.
#[utoipa::path(
    get,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "Items owned by the caller, ordered by id", body = Vec<ItemDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;
    let pagination = Pagination::from_query(query.from, query.size)?;

    let items = ItemService::new(&state.db)
        .find_all(&caller, pagination)
        .await?;

    let items: Vec<ItemDto> = items.into_iter().map(ItemDetails::into_dto).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Get an item with its comments.
///
/// Last and next booking are only filled in when the caller owns the item.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "The item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    let item = ItemService::new(&state.db).find_one(&caller, item_id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Search available items by name or description, ignoring case.
#[utoipa::path(
    get,
    path = "/items/search",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        SearchParam
    ),
    responses(
        (status = 200, description = "Matching available items", body = Vec<ItemSummaryDto>),
        (status = 400, description = "Invalid paging", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers).require().await?;
    let pagination = Pagination::from_query(query.from, query.size)?;
    let text = query.text.unwrap_or_default();

    let items = ItemService::new(&state.db)
        .find_by_text(&text, pagination)
        .await?;

    let items: Vec<ItemSummaryDto> = items.into_iter().map(Item::into_summary_dto).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// List a new item owned by the caller, optionally answering a request.
#[utoipa::path(
    post,
    path = "/items",
    tag = ITEM_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")),
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Created item", body = ItemSummaryDto),
        (status = 400, description = "Missing or blank fields", body = ErrorDto),
        (status = 404, description = "User or request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    let params = CreateItemParams::from_dto(payload)?;
    let item = ItemService::new(&state.db).create(&caller, params).await?;

    tracing::info!("User {} created item {}", caller.id, item.id);

    Ok((StatusCode::CREATED, Json(item.into_summary_dto())))
}

#[utoipa::path(
    patch,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Updated item", body = ItemSummaryDto),
        (status = 400, description = "Blank fields", body = ErrorDto),
        (status = 404, description = "Item not found or caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    let params = UpdateItemParams::from_dto(item_id, payload)?;
    let item = ItemService::new(&state.db).update(&caller, params).await?;

    tracing::info!("User {} updated item {}", caller.id, item.id);

    Ok((StatusCode::OK, Json(item.into_summary_dto())))
}

#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted with its bookings and comments"),
        (status = 404, description = "Item not found or caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    ItemService::new(&state.db)
        .remove_by_id(&caller, item_id)
        .await?;

    tracing::info!("User {} deleted item {}", caller.id, item_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Comment on an item the caller has finished an approved booking of.
#[utoipa::path(
    post,
    path = "/items/{item_id}/comment",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Created comment", body = CommentDto),
        (status = 400, description = "Blank text or no finished approved booking", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    let params = CreateCommentParams::from_dto(item_id, payload)?;
    let comment = ItemService::new(&state.db)
        .add_comment(&caller, params)
        .await?;

    tracing::info!(
        "User {} commented on item {} as comment {}",
        caller.id,
        item_id,
        comment.id
    );

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}
