//! Item domain models and parameters.

use crate::{
    model::item::{CreateItemDto, ItemDto, ItemSummaryDto, UpdateItemDto},
    server::{
        error::AppError,
        model::{booking::BookingShort, comment::Comment},
        util::validate::require_not_blank,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i32,
    pub request_id: Option<i32>,
}

impl Item {
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            owner_id: entity.owner_id,
            request_id: entity.request_id,
        }
    }

    pub fn into_summary_dto(self) -> ItemSummaryDto {
        ItemSummaryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            owner_id: self.owner_id,
            request_id: self.request_id,
        }
    }
}

/// Item as shown on its detail and listing endpoints.
///
/// `last_booking` and `next_booking` are only filled in when the viewer owns the item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub item: Item,
    pub last_booking: Option<BookingShort>,
    pub next_booking: Option<BookingShort>,
    pub comments: Vec<Comment>,
}

impl ItemDetails {
    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.item.id,
            name: self.item.name,
            description: self.item.description,
            available: self.item.available,
            owner_id: self.item.owner_id,
            request_id: self.item.request_id,
            last_booking: self.last_booking.map(BookingShort::into_dto),
            next_booking: self.next_booking.map(BookingShort::into_dto),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

/// Validated data for listing a new item. The owner is the caller.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
}

impl CreateItemParams {
    /// Validates an item creation payload.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Blank name, or missing description or availability
    pub fn from_dto(dto: CreateItemDto) -> Result<Self, AppError> {
        let name = require_not_blank("name", dto.name)?;
        let description = dto
            .description
            .ok_or_else(|| AppError::BadRequest("description must not be null".to_string()))?;
        let available = dto
            .available
            .ok_or_else(|| AppError::BadRequest("available must not be null".to_string()))?;

        Ok(Self {
            name,
            description,
            available,
            request_id: dto.request_id,
        })
    }
}

/// Partial item update; `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateItemParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItemParams {
    pub fn from_dto(id: i32, dto: UpdateItemDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto
                .name
                .map(|name| require_not_blank("name", name))
                .transpose()?,
            description: dto.description,
            available: dto.available,
        })
    }
}
