//! `SeaORM` Entity for the latest_bs_product_history_entry view (read-only)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "latest_bs_product_history_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bs_product_article_nbr: i32,
    pub retrieved_timestamp: i64,
    pub unit_volume: f64,
    pub unit_price: f64,
    pub alcvol: f64,
    pub apk: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
