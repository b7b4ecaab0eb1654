//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary. Parameter types carry validated input from controllers
//! into services.

pub mod booking;
pub mod comment;
pub mod item;
pub mod pagination;
pub mod request;
pub mod user;
