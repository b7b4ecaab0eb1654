//! Booking service: creation guards, the status transition and visibility rules.

use chrono::Utc;
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, item::ItemRepository},
    error::{booking::BookingError, AppError},
    model::{
        booking::{Booking, CreateBookingParams, ListBookingsParams},
        user::User,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books an item for the caller.
    ///
    /// Checks run in order: the item exists, it is available, the caller does not own it.
    /// Overlapping bookings are allowed and the item's availability is left unchanged.
    ///
    /// # Returns
    /// - `Ok(Booking)` - New booking in `WAITING`
    /// - `Err(AppError::NotFound)` - Item does not exist
    /// - `Err(BookingError::ItemUnavailable)` - Item is flagged unavailable
    /// - `Err(BookingError::OwnItem)` - Caller owns the item
    pub async fn create(
        &self,
        caller: &User,
        params: CreateBookingParams,
    ) -> Result<Booking, AppError> {
        let item = ItemRepository::new(self.db)
            .find_by_id(params.item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Item", params.item_id))?;

        if !item.available {
            return Err(BookingError::ItemUnavailable { item_id: item.id }.into());
        }

        if item.owner_id == caller.id {
            return Err(BookingError::OwnItem { item_id: item.id }.into());
        }

        let booking = BookingRepository::new(self.db)
            .create(caller.id, params)
            .await?;

        tracing::debug!(
            "User {} booked item {} as booking {}",
            caller.id,
            booking.item.id,
            booking.id
        );

        Ok(booking)
    }

    /// Approves or rejects a waiting booking on one of the caller's items.
    ///
    /// The transition is a conditional update, so of two concurrent calls only one succeeds.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking now `APPROVED` (`approved = true`) or `REJECTED`
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(BookingError::AccessDenied)` - Caller does not own the booked item
    /// - `Err(BookingError::ImmutableStatus)` - Booking already left `WAITING`
    pub async fn update_status(
        &self,
        caller: &User,
        booking_id: i32,
        approved: bool,
    ) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let booking = booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking", booking_id))?;

        if booking.item.owner_id != caller.id {
            return Err(BookingError::AccessDenied {
                user_id: caller.id,
                booking_id,
            }
            .into());
        }

        if booking.status != BookingStatus::Waiting {
            return Err(BookingError::ImmutableStatus { booking_id }.into());
        }

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };

        if !booking_repo
            .transition_from_waiting(booking_id, status)
            .await?
        {
            return Err(BookingError::ImmutableStatus { booking_id }.into());
        }

        Ok(Booking { status, ..booking })
    }

    /// Gets a booking visible to the caller: its booker or the item's owner.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Booking does not exist (checked first)
    /// - `Err(BookingError::AccessDenied)` - Caller is neither booker nor owner
    pub async fn find_one(&self, caller: &User, booking_id: i32) -> Result<Booking, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking", booking_id))?;

        if !booking.is_visible_to(caller.id) {
            return Err(BookingError::AccessDenied {
                user_id: caller.id,
                booking_id,
            }
            .into());
        }

        Ok(booking)
    }

    /// Lists the caller's own bookings in the requested state, newest start first.
    pub async fn list_for_booker(
        &self,
        caller: &User,
        params: ListBookingsParams,
    ) -> Result<Vec<Booking>, AppError> {
        let condition = params.state.condition(Utc::now());

        Ok(BookingRepository::new(self.db)
            .get_by_booker(caller.id, condition, params.pagination)
            .await?)
    }

    /// Lists bookings on the caller's items in the requested state, newest start first.
    pub async fn list_for_owner(
        &self,
        caller: &User,
        params: ListBookingsParams,
    ) -> Result<Vec<Booking>, AppError> {
        let condition = params.state.condition(Utc::now());

        Ok(BookingRepository::new(self.db)
            .get_by_item_owner(caller.id, condition, params.pagination)
            .await?)
    }
}
