use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        controller::param::{ApprovalParam, BookingListParam},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            booking::{Booking, BookingState, CreateBookingParams, ListBookingsParams},
            pagination::Pagination,
        },
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book an item for the caller.
///
/// The booking starts in `WAITING` until the item's owner approves or rejects it.
#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")),
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Created booking", body = BookingDto),
        (status = 400, description = "Invalid window or item unavailable", body = ErrorDto),
        (status = 404, description = "Item or user not found, or caller owns the item", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    let params = CreateBookingParams::from_dto(payload, Utc::now())?;
    let booking = BookingService::new(&state.db).create(&caller, params).await?;

    tracing::info!(
        "User {} created booking {} for item {}",
        caller.id,
        booking.id,
        booking.item.id
    );

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Approve or reject a waiting booking on one of the caller's items.
#[utoipa::path(
    patch,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("booking_id" = i32, Path, description = "Booking ID"),
        ApprovalParam
    ),
    responses(
        (status = 200, description = "Booking approved or rejected", body = BookingDto),
        (status = 400, description = "Booking is no longer waiting", body = ErrorDto),
        (status = 404, description = "Booking not found or caller does not own the item", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
    Query(params): Query<ApprovalParam>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    let booking = BookingService::new(&state.db)
        .update_status(&caller, booking_id, params.approved)
        .await?;

    tracing::info!(
        "User {} set booking {} to {:?}",
        caller.id,
        booking.id,
        booking.status
    );

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Get a booking visible to the caller as its booker or as the item's owner.
#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 404, description = "Booking not found or not visible to the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;

    let booking = BookingService::new(&state.db)
        .find_one(&caller, booking_id)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// List the caller's bookings in a state, newest start first.
#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        BookingListParam
    ),
    responses(
        (status = 200, description = "Bookings made by the caller", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid paging", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booker_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BookingListParam>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;
    let params = list_params(query)?;

    let bookings = BookingService::new(&state.db)
        .list_for_booker(&caller, params)
        .await?;

    let bookings: Vec<BookingDto> = bookings.into_iter().map(Booking::into_dto).collect();

    Ok((StatusCode::OK, Json(bookings)))
}

/// List bookings on the caller's items in a state, newest start first.
#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        BookingListParam
    ),
    responses(
        (status = 200, description = "Bookings on items owned by the caller", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid paging", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BookingListParam>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require().await?;
    let params = list_params(query)?;

    let bookings = BookingService::new(&state.db)
        .list_for_owner(&caller, params)
        .await?;

    let bookings: Vec<BookingDto> = bookings.into_iter().map(Booking::into_dto).collect();

    Ok((StatusCode::OK, Json(bookings)))
}

fn list_params(query: BookingListParam) -> Result<ListBookingsParams, AppError> {
    let state = match query.state {
        Some(state) => state.parse::<BookingState>()?,
        None => BookingState::default(),
    };

    Ok(ListBookingsParams {
        state,
        pagination: Pagination::from_query(query.from, query.size)?,
    })
}
