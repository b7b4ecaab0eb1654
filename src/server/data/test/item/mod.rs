use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, item::ItemFactory},
};

use crate::server::{
    data::item::ItemRepository,
    model::{
        item::{CreateItemParams, UpdateItemParams},
        pagination::Pagination,
    },
};

mod create;
mod delete_with_dependents;
mod get_by_request_ids;
mod search_available;
mod update;
