//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation. Factories take the foreign keys they need as arguments; use the
//! `helpers` module to create an entity together with its dependencies.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_user(&db).await?;
//! let item = factory::create_item(&db, owner.id).await?;
//!
//! let booking = factory::booking::BookingFactory::new(&db, item.id, booker.id)
//!     .window_days(-3, -2)
//!     .status(BookingStatus::Approved)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod item_request;
pub mod user;

pub use booking::create_booking;
pub use comment::create_comment;
pub use item::create_item;
pub use item_request::create_item_request;
pub use user::create_user;
