//! `SeaORM` Entity for bs_product table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bs_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub article_nbr: i32,
    pub url: String,
    pub product_name: String,
    pub category: String,
    pub subcategory: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bs_product_history_entry::Entity")]
    BsProductHistoryEntry,
    #[sea_orm(has_many = "super::dead_bs_product::Entity")]
    DeadBsProduct,
    #[sea_orm(has_one = "super::bs_product_review::Entity")]
    BsProductReview,
}

impl Related<super::bs_product_history_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BsProductHistoryEntry.def()
    }
}

impl Related<super::dead_bs_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeadBsProduct.def()
    }
}

impl Related<super::bs_product_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BsProductReview.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
