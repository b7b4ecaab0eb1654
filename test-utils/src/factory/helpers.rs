//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values (names, emails) in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner, an available item owned by them and a second user to act as booker.
///
/// # Returns
/// - `Ok((owner, item, booker))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_with_booker(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::item::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;
    let booker = crate::factory::user::create_user(db).await?;

    Ok((owner, item, booker))
}
