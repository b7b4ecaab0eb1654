//! Booking data repository.
//!
//! Listing queries order by `start` descending with `id` descending as tie-breaker, whatever
//! the state filter. Returned bookings carry their item and booker, loaded with one extra
//! query per table rather than per row.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

use crate::server::{
    model::{
        booking::{Booking, BookingShort, CreateBookingParams},
        item::Item,
        pagination::Pagination,
        user::User,
    },
    util::query::paginate,
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new `WAITING` booking for `booker_id`.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking with item and booker loaded
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown item
    pub async fn create(
        &self,
        booker_id: i32,
        params: CreateBookingParams,
    ) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            start: ActiveValue::Set(params.start),
            end: ActiveValue::Set(params.end),
            item_id: ActiveValue::Set(params.item_id),
            booker_id: ActiveValue::Set(booker_id),
            status: ActiveValue::Set(BookingStatus::Waiting),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let id = entity.id;
        self.load_relations(vec![entity])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!(
                "Booking with id {} not found after creation",
                id
            )))
    }

    /// Gets a booking by id with its item and booker.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let Some(entity) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![entity]).await?.pop())
    }

    /// Gets the bookings made by `booker_id` that satisfy `condition`.
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        condition: Condition,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Booking>, DbErr> {
        let query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(condition);

        self.fetch_ordered(query, pagination).await
    }

    /// Gets the bookings on items owned by `owner_id` that satisfy `condition`.
    pub async fn get_by_item_owner(
        &self,
        owner_id: i32,
        condition: Condition,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Booking>, DbErr> {
        let query = entity::prelude::Booking::find()
            .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .filter(condition);

        self.fetch_ordered(query, pagination).await
    }

    /// Moves a booking out of `WAITING` in a single conditional update.
    ///
    /// # Returns
    /// - `Ok(true)` - The booking was `WAITING` and now has `status`
    /// - `Ok(false)` - No row changed: the booking is missing or already left `WAITING`
    pub async fn transition_from_waiting(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .set(entity::booking::ActiveModel {
                status: ActiveValue::Set(status),
                ..Default::default()
            })
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Waiting))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// For each item, the booking that ended most recently before `now`.
    ///
    /// Status is not considered. Items without a finished booking are absent from the map.
    pub async fn get_last_for_items(
        &self,
        item_ids: Vec<i32>,
        now: DateTime<Utc>,
    ) -> Result<HashMap<i32, BookingShort>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        // Only rows at the per-item maximum are loaded; ties are broken by `first_per_item`.
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.is_in(item_ids))
            .filter(Expr::cust_with_values(
                r#""end" = (SELECT MAX(b."end") FROM booking AS b WHERE b.item_id = booking.item_id AND b."end" < ?)"#,
                [now],
            ))
            .order_by_desc(entity::booking::Column::End)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(first_per_item(entities))
    }

    /// For each item, the booking starting soonest after `now`.
    ///
    /// Status is not considered. Items without an upcoming booking are absent from the map.
    pub async fn get_next_for_items(
        &self,
        item_ids: Vec<i32>,
        now: DateTime<Utc>,
    ) -> Result<HashMap<i32, BookingShort>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.is_in(item_ids))
            .filter(Expr::cust_with_values(
                r#""start" = (SELECT MIN(b."start") FROM booking AS b WHERE b.item_id = booking.item_id AND b."start" > ?)"#,
                [now],
            ))
            .order_by_asc(entity::booking::Column::Start)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(first_per_item(entities))
    }

    /// Whether `booker_id` holds an `APPROVED` booking of `item_id` that ended before `now`.
    pub async fn has_finished_approved(
        &self,
        booker_id: i32,
        item_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved))
            .filter(entity::booking::Column::End.lt(now))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn fetch_ordered(
        &self,
        query: Select<entity::booking::Entity>,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Booking>, DbErr> {
        let query = query
            .order_by_desc(entity::booking::Column::Start)
            .order_by_desc(entity::booking::Column::Id);

        let entities = paginate(query, pagination).all(self.db).await?;

        self.load_relations(entities).await
    }

    /// Attaches item and booker to each booking, keeping the input order.
    async fn load_relations(
        &self,
        entities: Vec<entity::booking::Model>,
    ) -> Result<Vec<Booking>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let item_ids: Vec<i32> = entities.iter().map(|b| b.item_id).collect();
        let booker_ids: Vec<i32> = entities.iter().map(|b| b.booker_id).collect();

        let items: HashMap<i32, Item> = entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(item_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|item| (item.id, Item::from_entity(item)))
            .collect();

        let bookers: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(booker_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, User::from_entity(user)))
            .collect();

        entities
            .into_iter()
            .map(|booking| {
                let item = items.get(&booking.item_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Item {} of booking {} not found",
                        booking.item_id, booking.id
                    ))
                })?;
                let booker = bookers.get(&booking.booker_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Booker {} of booking {} not found",
                        booking.booker_id, booking.id
                    ))
                })?;

                Ok(Booking::from_entity(booking, item, booker))
            })
            .collect()
    }
}

/// Keeps the first booking seen for each item; input must already be in preference order.
fn first_per_item(entities: Vec<entity::booking::Model>) -> HashMap<i32, BookingShort> {
    let mut by_item = HashMap::new();

    for booking in entities {
        by_item
            .entry(booking.item_id)
            .or_insert_with(|| BookingShort::from_entity(booking));
    }

    by_item
}
