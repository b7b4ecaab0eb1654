//! Item service: listing, search, ownership checks and comments.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
        item_request::ItemRequestRepository,
    },
    error::{item::ItemError, AppError},
    model::{
        comment::{Comment, CreateCommentParams},
        item::{CreateItemParams, Item, ItemDetails, UpdateItemParams},
        pagination::Pagination,
        user::User,
    },
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the caller's available items ordered by id, with bookings and comments.
    pub async fn find_all(
        &self,
        caller: &User,
        pagination: Option<Pagination>,
    ) -> Result<Vec<ItemDetails>, AppError> {
        let items = ItemRepository::new(self.db)
            .get_available_by_owner(caller.id, pagination)
            .await?;

        self.with_details(caller, items).await
    }

    /// Gets any item with its comments; last/next booking only when the caller owns it.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No item with that id
    pub async fn find_one(&self, caller: &User, item_id: i32) -> Result<ItemDetails, AppError> {
        let item = self.require_item(item_id).await?;

        self.with_details(caller, vec![item])
            .await?
            .pop()
            .ok_or_else(|| AppError::not_found("Item", item_id))
    }

    /// Finds available items whose name or description contains `text`, ignoring case.
    ///
    /// A blank `text` returns an empty list without querying the database.
    pub async fn find_by_text(
        &self,
        text: &str,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Item>, AppError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(ItemRepository::new(self.db)
            .search_available(text, pagination)
            .await?)
    }

    /// Lists a new item owned by the caller.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - `request_id` given but no such request exists
    pub async fn create(&self, caller: &User, params: CreateItemParams) -> Result<Item, AppError> {
        if let Some(request_id) = params.request_id {
            ItemRequestRepository::new(self.db)
                .find_by_id(request_id)
                .await?
                .ok_or_else(|| AppError::not_found("ItemRequest", request_id))?;
        }

        Ok(ItemRepository::new(self.db)
            .create(caller.id, params)
            .await?)
    }

    /// Updates the provided fields of one of the caller's items.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No item with that id
    /// - `Err(ItemError::AccessDenied)` - Caller is not the owner
    pub async fn update(&self, caller: &User, params: UpdateItemParams) -> Result<Item, AppError> {
        let item = self.require_item(params.id).await?;
        require_owner(caller, &item)?;

        Ok(ItemRepository::new(self.db).update(params).await?)
    }

    /// Deletes one of the caller's items together with its bookings and comments.
    pub async fn remove_by_id(&self, caller: &User, item_id: i32) -> Result<(), AppError> {
        let item = self.require_item(item_id).await?;
        require_owner(caller, &item)?;

        Ok(ItemRepository::new(self.db)
            .delete_with_dependents(item_id)
            .await?)
    }

    /// Adds a comment from the caller, who must have finished an approved booking of the item.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Comment authored by the caller, created now
    /// - `Err(AppError::NotFound)` - No item with that id
    /// - `Err(ItemError::NotAllowedToComment)` - No approved booking of the item has ended
    pub async fn add_comment(
        &self,
        caller: &User,
        params: CreateCommentParams,
    ) -> Result<Comment, AppError> {
        let item = self.require_item(params.item_id).await?;
        let now = Utc::now();

        let eligible = BookingRepository::new(self.db)
            .has_finished_approved(caller.id, item.id, now)
            .await?;

        if !eligible {
            return Err(ItemError::NotAllowedToComment {
                user_id: caller.id,
                item_id: item.id,
            }
            .into());
        }

        Ok(CommentRepository::new(self.db)
            .create(caller, params, now)
            .await?)
    }

    async fn require_item(&self, item_id: i32) -> Result<Item, AppError> {
        ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Item", item_id))
    }

    /// Attaches comments to every item, and last/next booking to the caller's own items.
    async fn with_details(
        &self,
        caller: &User,
        items: Vec<Item>,
    ) -> Result<Vec<ItemDetails>, AppError> {
        let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();
        let owned_ids: Vec<i32> = items
            .iter()
            .filter(|item| item.owner_id == caller.id)
            .map(|item| item.id)
            .collect();

        let mut comments = CommentRepository::new(self.db)
            .get_by_item_ids(item_ids)
            .await?;

        let booking_repo = BookingRepository::new(self.db);
        let now = Utc::now();
        let mut last = booking_repo
            .get_last_for_items(owned_ids.clone(), now)
            .await?;
        let mut next = booking_repo.get_next_for_items(owned_ids, now).await?;

        Ok(items
            .into_iter()
            .map(|item| ItemDetails {
                last_booking: last.remove(&item.id),
                next_booking: next.remove(&item.id),
                comments: comments.remove(&item.id).unwrap_or_default(),
                item,
            })
            .collect())
    }
}

fn require_owner(caller: &User, item: &Item) -> Result<(), AppError> {
    if item.owner_id != caller.id {
        return Err(ItemError::AccessDenied {
            user_id: caller.id,
            item_id: item.id,
        }
        .into());
    }

    Ok(())
}
