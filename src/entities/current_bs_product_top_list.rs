//! `SeaORM` Entity for the current_bs_product_top_list view (read-only)
//!
//! One row per live product: its latest history entry plus its rank by APK.
//! The view is recomputed by the database on every read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "current_bs_product_top_list")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bs_product_article_nbr: i32,
    pub url: String,
    pub product_name: String,
    pub category: String,
    pub subcategory: String,
    pub unit_volume: f64,
    pub unit_price: f64,
    pub alcvol: f64,
    pub apk: f64,
    pub retrieved_timestamp: i64,
    pub current_rank: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bs_product_review::Entity",
        from = "Column::BsProductArticleNbr",
        to = "super::bs_product_review::Column::BsProductArticleNbr"
    )]
    BsProductReview,
}

impl Related<super::bs_product_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BsProductReview.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
