use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::entities::{bs_product_review, prelude::*};
use crate::models::product::ProductReview;

/// Review per requested article number, `None` when the product has none
/// (or does not exist). Every requested article number is a key.
pub async fn get_product_reviews(
    db: &DatabaseConnection,
    article_nbrs: &[i32],
) -> Result<HashMap<i32, Option<ProductReview>>, DbErr> {
    let mut reviews: HashMap<i32, Option<ProductReview>> =
        article_nbrs.iter().map(|article_nbr| (*article_nbr, None)).collect();

    if article_nbrs.is_empty() {
        return Ok(reviews);
    }

    let rows = BsProductReview::find()
        .filter(bs_product_review::Column::BsProductArticleNbr.is_in(article_nbrs.iter().copied()))
        .all(db)
        .await?;

    for row in rows {
        reviews.insert(row.bs_product_article_nbr, Some(row.into()));
    }

    Ok(reviews)
}
