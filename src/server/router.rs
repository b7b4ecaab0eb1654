use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        booking, item, request, user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "ShareIt", description = "Item sharing and booking API"),
    tags(
        (name = "user", description = "User registration and profile"),
        (name = "item", description = "Items, search and comments"),
        (name = "booking", description = "Bookings and approval"),
        (name = "request", description = "Requests for items nobody has listed")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(item::get_items, item::create_item))
        .routes(routes!(item::search_items))
        .routes(routes!(item::get_item, item::update_item, item::delete_item))
        .routes(routes!(item::add_comment))
        .routes(routes!(
            booking::create_booking,
            booking::get_booker_bookings
        ))
        .routes(routes!(booking::get_owner_bookings))
        .routes(routes!(
            booking::get_booking,
            booking::update_booking_status
        ))
        .routes(routes!(
            request::create_request,
            request::get_own_requests
        ))
        .routes(routes!(request::get_other_requests))
        .routes(routes!(request::get_request))
        .split_for_parts();

    router.route(
        "/api/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
