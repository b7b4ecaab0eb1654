use chrono::{DateTime, Utc};

use crate::{
    model::item::{CommentDto, CreateCommentDto},
    server::{error::AppError, util::validate::require_not_blank},
};

/// Comment left on an item, carrying the author's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub item_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Converts a comment entity at the repository boundary, given its author's name.
    pub fn from_entity(entity: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            item_id: entity.item_id,
            author_id: entity.author_id,
            author_name,
            created: entity.created,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author_name: self.author_name,
            created: self.created,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub item_id: i32,
    pub text: String,
}

impl CreateCommentParams {
    pub fn from_dto(item_id: i32, dto: CreateCommentDto) -> Result<Self, AppError> {
        Ok(Self {
            item_id,
            text: require_not_blank("text", dto.text)?,
        })
    }
}
