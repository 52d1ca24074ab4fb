//! Price and dead-marker history lookups

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{bs_product, bs_product_history_entry, dead_bs_product, prelude::*};
use crate::models::product::{
    DeadProductHistoryEntry, FullHistoryResponse, PriceSnapshot, ProductHistoryResponse,
};
use crate::services::row_shaping::product_history_entry;

/// Whole history of one product, newest first. Unknown products get empty
/// lists.
pub async fn get_full_history(
    db: &DatabaseConnection,
    article_nbr: i32,
) -> Result<FullHistoryResponse, DbErr> {
    let (history, dead) = tokio::try_join!(
        BsProductHistoryEntry::find()
            .filter(bs_product_history_entry::Column::BsProductArticleNbr.eq(article_nbr))
            .order_by_desc(bs_product_history_entry::Column::RetrievedTimestamp)
            .all(db),
        DeadBsProduct::find()
            .filter(dead_bs_product::Column::BsProductArticleNbr.eq(article_nbr))
            .order_by_desc(dead_bs_product::Column::MarkedDeadTimestamp)
            .all(db),
    )?;

    Ok(FullHistoryResponse {
        history: history.into_iter().map(PriceSnapshot::from).collect(),
        marked_dead_history: dead.into_iter().map(DeadProductHistoryEntry::from).collect(),
    })
}

/// History of several products, oldest first, keyed by article number.
/// Article numbers without a product are left out.
pub async fn get_product_history(
    db: &DatabaseConnection,
    article_nbrs: &[i32],
) -> Result<HashMap<i32, ProductHistoryResponse>, DbErr> {
    if article_nbrs.is_empty() {
        return Ok(HashMap::new());
    }

    let (products, history, dead) = tokio::try_join!(
        BsProduct::find()
            .filter(bs_product::Column::ArticleNbr.is_in(article_nbrs.iter().copied()))
            .all(db),
        BsProductHistoryEntry::find()
            .filter(
                bs_product_history_entry::Column::BsProductArticleNbr
                    .is_in(article_nbrs.iter().copied()),
            )
            .order_by_asc(bs_product_history_entry::Column::RetrievedTimestamp)
            .all(db),
        DeadBsProduct::find()
            .filter(
                dead_bs_product::Column::BsProductArticleNbr.is_in(article_nbrs.iter().copied()),
            )
            .order_by_asc(dead_bs_product::Column::MarkedDeadTimestamp)
            .all(db),
    )?;

    let products: HashMap<i32, bs_product::Model> = products
        .into_iter()
        .map(|product| (product.article_nbr, product))
        .collect();

    let mut response: HashMap<i32, ProductHistoryResponse> = products
        .keys()
        .map(|article_nbr| (*article_nbr, ProductHistoryResponse::default()))
        .collect();

    for entry in history {
        if let (Some(product), Some(target)) = (
            products.get(&entry.bs_product_article_nbr),
            response.get_mut(&entry.bs_product_article_nbr),
        ) {
            target.history.push(product_history_entry(product, entry));
        }
    }

    for marker in dead {
        if let Some(target) = response.get_mut(&marker.bs_product_article_nbr) {
            target.marked_dead_history.push(marker.into());
        }
    }

    Ok(response)
}
