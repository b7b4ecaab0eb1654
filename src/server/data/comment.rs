use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    comment::{Comment, CreateCommentParams},
    user::User,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a comment written by `author` at `created`.
    pub async fn create(
        &self,
        author: &User,
        params: CreateCommentParams,
        created: DateTime<Utc>,
    ) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            text: ActiveValue::Set(params.text),
            item_id: ActiveValue::Set(params.item_id),
            author_id: ActiveValue::Set(author.id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity, author.name.clone()))
    }

    /// Gets the comments of the given items grouped by item id, oldest first.
    pub async fn get_by_item_ids(
        &self,
        item_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<Comment>>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.is_in(item_ids))
            .order_by_asc(entity::comment::Column::Created)
            .order_by_asc(entity::comment::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut by_item: HashMap<i32, Vec<Comment>> = HashMap::new();
        for (comment, author) in rows {
            let author_name = author.map(|a| a.name).unwrap_or_default();
            by_item
                .entry(comment.item_id)
                .or_default()
                .push(Comment::from_entity(comment, author_name));
        }

        Ok(by_item)
    }
}
