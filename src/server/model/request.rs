use chrono::{DateTime, Utc};

use crate::{
    model::request::{CreateItemRequestDto, ItemRequestDto},
    server::{error::AppError, model::item::Item, util::validate::require_not_blank},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub id: i32,
    pub description: String,
    pub requestor_id: i32,
    pub created: DateTime<Utc>,
}

impl ItemRequest {
    pub fn from_entity(entity: entity::item_request::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            requestor_id: entity.requestor_id,
            created: entity.created,
        }
    }
}

/// Request together with the items that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequestWithItems {
    pub request: ItemRequest,
    pub items: Vec<Item>,
}

impl ItemRequestWithItems {
    pub fn into_dto(self) -> ItemRequestDto {
        ItemRequestDto {
            id: self.request.id,
            description: self.request.description,
            created: self.request.created,
            items: self.items.into_iter().map(Item::into_summary_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateItemRequestParams {
    pub description: String,
}

impl CreateItemRequestParams {
    pub fn from_dto(dto: CreateItemRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            description: require_not_blank("description", dto.description)?,
        })
    }
}
