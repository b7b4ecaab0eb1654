use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, item::ItemFactory, user::UserFactory},
};

use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};

mod create;
mod delete_with_dependents;
mod update;
