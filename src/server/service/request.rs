//! Item request service.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{item::ItemRepository, item_request::ItemRequestRepository},
    error::AppError,
    model::{
        item::Item,
        pagination::Pagination,
        request::{CreateItemRequestParams, ItemRequest, ItemRequestWithItems},
        user::User,
    },
};

pub struct ItemRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new request by the caller, created now.
    pub async fn create(
        &self,
        caller: &User,
        params: CreateItemRequestParams,
    ) -> Result<ItemRequestWithItems, AppError> {
        let request = ItemRequestRepository::new(self.db)
            .create(caller.id, params, Utc::now())
            .await?;

        Ok(ItemRequestWithItems {
            request,
            items: Vec::new(),
        })
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No request with that id
    pub async fn find_by_id(&self, id: i32) -> Result<ItemRequestWithItems, AppError> {
        let request = ItemRequestRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("ItemRequest", id))?;

        let items = ItemRepository::new(self.db)
            .get_by_request_ids(vec![id])
            .await?;

        Ok(ItemRequestWithItems { request, items })
    }

    /// Lists requests created by other users, newest first, optionally paged.
    pub async fn find_all_created_by_others(
        &self,
        caller: &User,
        pagination: Option<Pagination>,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        let requests = ItemRequestRepository::new(self.db)
            .get_by_other_requestors(caller.id, pagination)
            .await?;

        self.with_items(requests).await
    }

    /// Lists the caller's own requests, newest first.
    pub async fn find_all_for_current_user(
        &self,
        caller: &User,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        let requests = ItemRequestRepository::new(self.db)
            .get_by_requestor(caller.id)
            .await?;

        self.with_items(requests).await
    }

    async fn with_items(
        &self,
        requests: Vec<ItemRequest>,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        let request_ids: Vec<i32> = requests.iter().map(|request| request.id).collect();

        let mut items_by_request: HashMap<i32, Vec<Item>> = HashMap::new();
        for item in ItemRepository::new(self.db)
            .get_by_request_ids(request_ids)
            .await?
        {
            if let Some(request_id) = item.request_id {
                items_by_request.entry(request_id).or_default().push(item);
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| ItemRequestWithItems {
                items: items_by_request.remove(&request.id).unwrap_or_default(),
                request,
            })
            .collect())
    }
}
