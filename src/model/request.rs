use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::item::ItemSummaryDto;

/// Item request together with the items offered in response to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemRequestDto {
    pub id: i32,
    pub description: String,
    pub created: DateTime<Utc>,
    pub items: Vec<ItemSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateItemRequestDto {
    #[serde(default)]
    pub description: String,
}
