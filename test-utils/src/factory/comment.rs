//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    author_id: i32,
    text: String,
    created: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with text `"Comment {id}"` created now.
    pub fn new(db: &'a DatabaseConnection, item_id: i32, author_id: i32) -> Self {
        Self {
            db,
            item_id,
            author_id,
            text: format!("Comment {}", next_id()),
            created: Utc::now(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            text: ActiveValue::Set(self.text),
            item_id: ActiveValue::Set(self.item_id),
            author_id: ActiveValue::Set(self.author_id),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    item_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, item_id, author_id).build().await
}
