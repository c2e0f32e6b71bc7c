//! Room entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub hotel_id: i32,

    pub name: String,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub amenities: String,

    #[sea_orm(column_type = "Text")]
    pub pictures: String,

    #[sea_orm(column_type = "Double")]
    pub price: f64,

    /// Written only by the check-in/check-out workflow
    pub occupied: bool,

    pub last_update: DateTimeUtc,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
    #[sea_orm(has_many = "super::check_in::Entity")]
    CheckIns,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<super::check_in::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckIns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
