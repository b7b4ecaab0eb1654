//! Wire DTOs exchanged over the HTTP API.
//!
//! Field names are snake_case and timestamps are RFC 3339 UTC strings.

pub mod api;
pub mod booking;
pub mod item;
pub mod request;
pub mod user;
