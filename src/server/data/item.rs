//! Item data repository for database operations.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    model::{
        item::{CreateItemParams, Item, UpdateItemParams},
        pagination::Pagination,
    },
    util::query::{contains_pattern, fold_case, paginate},
};

pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item owned by `owner_id`.
    pub async fn create(&self, owner_id: i32, params: CreateItemParams) -> Result<Item, DbErr> {
        let entity = entity::item::ActiveModel {
            search_name: ActiveValue::Set(fold_case(&params.name)),
            search_description: ActiveValue::Set(fold_case(&params.description)),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            available: ActiveValue::Set(params.available),
            owner_id: ActiveValue::Set(owner_id),
            request_id: ActiveValue::Set(params.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Gets the available items of an owner ordered by id, optionally paged.
    pub async fn get_available_by_owner(
        &self,
        owner_id: i32,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Item>, DbErr> {
        let query = entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .filter(entity::item::Column::Available.eq(true))
            .order_by_asc(entity::item::Column::Id);

        let entities = paginate(query, pagination).all(self.db).await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Finds available items whose name or description contains `text`, ignoring case.
    ///
    /// Matches against the stored `search_*` columns, so non-ASCII letters fold the
    /// same way on both sides. Results are ordered by id and optionally paged.
    pub async fn search_available(
        &self,
        text: &str,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Item>, DbErr> {
        let pattern = contains_pattern(text);

        let query = entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .filter(Expr::cust_with_values(
                "(search_name LIKE ? ESCAPE '!' OR search_description LIKE ? ESCAPE '!')",
                [pattern.clone(), pattern],
            ))
            .order_by_asc(entity::item::Column::Id);

        let entities = paginate(query, pagination).all(self.db).await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Gets every item offered in response to one of the given requests, ordered by id.
    pub async fn get_by_request_ids(&self, request_ids: Vec<i32>) -> Result<Vec<Item>, DbErr> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Applies the fields present in `params` to an existing item.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(DbErr::RecordNotFound)` - No item with the given id
    pub async fn update(&self, params: UpdateItemParams) -> Result<Item, DbErr> {
        let item = entity::prelude::Item::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Item with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::item::ActiveModel = item.into();
        if let Some(name) = params.name {
            active_model.search_name = ActiveValue::Set(fold_case(&name));
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.search_description = ActiveValue::Set(fold_case(&description));
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(available) = params.available {
            active_model.available = ActiveValue::Set(available);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Item::from_entity(entity))
    }

    /// Deletes an item with its bookings and comments in one transaction.
    pub async fn delete_with_dependents(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ItemId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::ItemId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Item::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}
