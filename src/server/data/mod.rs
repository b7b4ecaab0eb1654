//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each table and convert entity models into domain
//! models at this boundary. Multi-table deletes run inside a transaction and remove dependent
//! rows explicitly, since the schema does not cascade.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;

#[cfg(test)]
mod test;
