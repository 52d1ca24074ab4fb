//! `SeaORM` Entity for bs_product_review table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bs_product_review")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bs_product_article_nbr: i32,
    pub review_score: f64,
    #[sea_orm(column_type = "Text")]
    pub review_text: String,
    pub reviewer_name: String,
    pub review_created_timestamp: i64,
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
