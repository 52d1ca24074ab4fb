//! Current top list queries
//!
//! Reads the `current_bs_product_top_list` view, which the database
//! recomputes on every read.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::debug;

use crate::entities::{current_bs_product_top_list, prelude::*};
use crate::models::product::{ProductCountResponse, ProductHistoryEntry};
use crate::models::search::TopListSearchRequest;
use crate::services::query_builder::{filter_conditions, page_bounds, ProductColumns};
use crate::services::row_shaping::top_list_entry;

/// Search the current top list. Every returned entry carries its rank and,
/// when one exists, the product's review.
pub async fn search_top_list(
    db: &DatabaseConnection,
    request: &TopListSearchRequest,
) -> Result<Vec<ProductHistoryEntry>, DbErr> {
    let columns = ProductColumns::top_list();
    let mut select = CurrentBsProductTopList::find().find_also_related(BsProductReview);

    for condition in filter_conditions(&columns, &request.filter) {
        select = select.filter(condition);
    }
    for (expr, order) in columns.order_by(&request.page, false) {
        select = select.order_by(expr, order);
    }

    let (limit, offset) = page_bounds(&request.page);
    let rows = select.limit(limit).offset(offset).all(db).await?;

    debug!(count = rows.len(), "Top list search");

    Ok(rows
        .into_iter()
        .map(|(row, review)| top_list_entry(row, review))
        .collect())
}

/// Current rank of each requested product. Dead and unknown products are
/// left out of the map.
pub async fn get_current_ranks(
    db: &DatabaseConnection,
    article_nbrs: &[i32],
) -> Result<HashMap<i32, i64>, DbErr> {
    if article_nbrs.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = CurrentBsProductTopList::find()
        .filter(
            current_bs_product_top_list::Column::BsProductArticleNbr
                .is_in(article_nbrs.iter().copied()),
        )
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.bs_product_article_nbr, row.current_rank))
        .collect())
}

/// Live products and every product ever seen
pub async fn count_products(db: &DatabaseConnection) -> Result<ProductCountResponse, DbErr> {
    let (current, all) = tokio::try_join!(
        CurrentBsProductTopList::find().count(db),
        BsProduct::find().count(db),
    )?;

    Ok(ProductCountResponse { current, all })
}
