//! SeaORM entity models for the ShareIt schema.
//!
//! Relations are declared as plain foreign keys. Nothing here cascades; deleting a row with
//! dependents is the responsibility of the repository layer.

pub mod prelude;

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod sea_orm_active_enums;
pub mod user;
