//! `SeaORM` Entity for bs_product_history_entry table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bs_product_history_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bs_product_article_nbr: i32,
    /// Epoch milliseconds
    #[sea_orm(primary_key, auto_increment = false)]
    pub retrieved_timestamp: i64,
    pub unit_volume: f64,
    pub unit_price: f64,
    pub alcvol: f64,
    pub apk: f64,
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
