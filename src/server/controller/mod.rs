//! HTTP handlers.
//!
//! Each handler resolves the caller through `AuthGuard` (user endpoints excepted), converts
//! the request DTO into validated params, calls a service and converts the result to a DTO.

pub mod booking;
pub mod item;
pub mod param;
pub mod request;
pub mod user;
