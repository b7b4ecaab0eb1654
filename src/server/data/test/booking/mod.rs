use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::create_item_with_booker},
};

use crate::server::{
    data::booking::BookingRepository,
    model::{
        booking::{BookingState, CreateBookingParams},
        pagination::Pagination,
    },
};

mod closest;
mod create;
mod get_by_booker;
mod has_finished_approved;
mod transition_from_waiting;
