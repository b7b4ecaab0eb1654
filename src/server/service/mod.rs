//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the booking
//! lifecycle, ownership and visibility rules and work with domain models. The resolved caller
//! is passed explicitly to every operation that depends on identity.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;
