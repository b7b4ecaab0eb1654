//! Item factory for creating test item entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items with customizable fields.
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: String,
    available: bool,
    request_id: Option<i32>,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"`
    /// - description: `"Description of item {id}"`
    /// - available: `true`
    /// - request_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the user owning the item
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Item {}", id),
            description: format!("Description of item {}", id),
            available: true,
            request_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Links the item to the request it fulfils.
    pub fn request_id(mut self, request_id: i32) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Builds and inserts the item entity into the database.
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            search_name: ActiveValue::Set(self.name.to_lowercase()),
            search_description: ActiveValue::Set(self.description.to_lowercase()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            available: ActiveValue::Set(self.available),
            owner_id: ActiveValue::Set(self.owner_id),
            request_id: ActiveValue::Set(self.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available item with default values.
pub async fn create_item(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db, owner_id).build().await
}
