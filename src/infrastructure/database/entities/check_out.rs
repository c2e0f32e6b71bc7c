//! CheckOut entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "check_outs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Staff user
    pub checked_out_by: i32,

    #[sea_orm(unique)]
    pub check_in_id: i32,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::check_in::Entity",
        from = "Column::CheckInId",
        to = "super::check_in::Column::Id"
    )]
    CheckIn,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CheckedOutBy",
        to = "super::user::Column::Id"
    )]
    CheckedOutBy,
}

impl Related<super::check_in::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckIn.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
