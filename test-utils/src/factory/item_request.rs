//! Item request factory for creating test request entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item requests with customizable fields.
pub struct ItemRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requestor_id: i32,
    description: String,
    created: DateTime<Utc>,
}

impl<'a> ItemRequestFactory<'a> {
    /// Creates a new ItemRequestFactory with description `"Looking for thing {id}"` created now.
    pub fn new(db: &'a DatabaseConnection, requestor_id: i32) -> Self {
        Self {
            db,
            requestor_id,
            description: format!("Looking for thing {}", next_id()),
            created: Utc::now(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the creation time, used to control ordering in listing tests.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Builds and inserts the item request entity into the database.
    pub async fn build(self) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            description: ActiveValue::Set(self.description),
            requestor_id: ActiveValue::Set(self.requestor_id),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item request with default values.
pub async fn create_item_request(
    db: &DatabaseConnection,
    requestor_id: i32,
) -> Result<entity::item_request::Model, DbErr> {
    ItemRequestFactory::new(db, requestor_id).build().await
}
