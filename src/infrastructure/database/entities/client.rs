//! Client (guest) entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub first_name: String,
    pub last_name: String,

    #[sea_orm(nullable)]
    pub phone_num: Option<String>,

    #[sea_orm(nullable)]
    pub address: Option<String>,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    /// Identity document: passport, national id, ...
    #[sea_orm(nullable)]
    pub identity_type: Option<String>,

    #[sea_orm(nullable)]
    pub identity_num: Option<String>,

    #[sea_orm(nullable)]
    pub identity_pic: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::check_in::Entity")]
    CheckIns,
}

impl Related<super::check_in::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckIns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
