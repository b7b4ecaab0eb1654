use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::BookingStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub start: DateTimeUtc,
    pub end: DateTimeUtc,
    pub item_id: i32,
    pub booker_id: i32,
    pub status: BookingStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::BookerId",
        to = "super::user::Column::Id"
    )]
    Booker,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
