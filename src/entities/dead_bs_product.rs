//! `SeaORM` Entity for dead_bs_product table
//!
//! Each row is one interval during which a product was delisted. The
//! database rejects a second open interval (no revived timestamp) for the
//! same product.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dead_bs_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bs_product_article_nbr: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub marked_dead_timestamp: i64,
    pub marked_revived_timestamp: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bs_product::Entity",
        from = "Column::BsProductArticleNbr",
        to = "super::bs_product::Column::ArticleNbr",
        on_delete = "Cascade"
    )]
    BsProduct,
}

impl Related<super::bs_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BsProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
