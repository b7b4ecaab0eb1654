//! User data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies the fields present in `params` to an existing user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with the given id
    /// - `Err(DbErr)` - Other database error, including a unique violation on `email`
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user together with every row that references them.
    ///
    /// Runs in a single transaction, in this order:
    /// 1. comments written by the user
    /// 2. bookings made by the user
    /// 3. bookings and comments on the user's items, then the items
    /// 4. links from other items to the user's requests, then the requests
    /// 5. the user
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with the given id; nothing was changed
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete_with_dependents(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::AuthorId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::BookerId.eq(id))
            .exec(&txn)
            .await?;

        let item_ids: Vec<i32> = entity::prelude::Item::find()
            .select_only()
            .column(entity::item::Column::Id)
            .filter(entity::item::Column::OwnerId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !item_ids.is_empty() {
            entity::prelude::Booking::delete_many()
                .filter(entity::booking::Column::ItemId.is_in(item_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::Comment::delete_many()
                .filter(entity::comment::Column::ItemId.is_in(item_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::Item::delete_many()
                .filter(entity::item::Column::Id.is_in(item_ids))
                .exec(&txn)
                .await?;
        }

        let request_ids: Vec<i32> = entity::prelude::ItemRequest::find()
            .select_only()
            .column(entity::item_request::Column::Id)
            .filter(entity::item_request::Column::RequestorId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !request_ids.is_empty() {
            entity::prelude::Item::update_many()
                .set(entity::item::ActiveModel {
                    request_id: ActiveValue::Set(None),
                    ..Default::default()
                })
                .filter(entity::item::Column::RequestId.is_in(request_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::ItemRequest::delete_many()
                .filter(entity::item_request::Column::Id.is_in(request_ids))
                .exec(&txn)
                .await?;
        }

        let result = entity::prelude::User::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
