//! ShareIt Test Utils
//!
//! Shared testing utilities for the ShareIt server. This crate offers a builder for creating
//! test contexts backed by in-memory SQLite databases, and factories for seeding users, items,
//! bookings, comments and item requests.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder for configuring the tables a test needs
//! - **TestContext**: test environment holding the database connection
//! - **TestError**: errors that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn finds_booking() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_booking_tables().build().await?;
//!     let db = test.db.unwrap();
//!     // Seed with factories and exercise repositories...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
