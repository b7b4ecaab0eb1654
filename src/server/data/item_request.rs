use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        pagination::Pagination,
        request::{CreateItemRequestParams, ItemRequest},
    },
    util::query::paginate,
};

pub struct ItemRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        requestor_id: i32,
        params: CreateItemRequestParams,
        created: DateTime<Utc>,
    ) -> Result<ItemRequest, DbErr> {
        let entity = entity::item_request::ActiveModel {
            description: ActiveValue::Set(params.description),
            requestor_id: ActiveValue::Set(requestor_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ItemRequest::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ItemRequest>, DbErr> {
        let entity = entity::prelude::ItemRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ItemRequest::from_entity))
    }

    /// Gets the requests created by `requestor_id`, newest first.
    pub async fn get_by_requestor(&self, requestor_id: i32) -> Result<Vec<ItemRequest>, DbErr> {
        let entities = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequestorId.eq(requestor_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }

    /// Gets the requests created by anyone but `requestor_id`, newest first, optionally paged.
    pub async fn get_by_other_requestors(
        &self,
        requestor_id: i32,
        pagination: Option<Pagination>,
    ) -> Result<Vec<ItemRequest>, DbErr> {
        let query = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequestorId.ne(requestor_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id);

        let entities = paginate(query, pagination).all(self.db).await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }
}
