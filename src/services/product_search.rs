//! Product search with nested price and dead-marker history

use std::collections::HashMap;

use sea_orm::{
    sea_query::{Alias, Expr, JoinType, Query},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder,
};
use tracing::debug;

use crate::entities::{
    bs_product, bs_product_history_entry, current_bs_product_top_list, dead_bs_product,
    latest_bs_product_history_entry, prelude::*,
};
use crate::models::product::{DeadProductHistoryEntry, PriceSnapshot, ProductSearchResponse};
use crate::models::search::ProductSearchRequest;
use crate::services::query_builder::{filter_conditions, page_bounds, ProductColumns};
use crate::services::row_shaping::{timestamp_to_date, ProductSearchRow};

/// Search products by static info and by their latest history entry.
///
/// Currently dead products are skipped unless `include_dead` is set. Each
/// result carries its price history and dead history, newest first and
/// truncated to the requested lengths.
pub async fn search_products(
    db: &DatabaseConnection,
    request: &ProductSearchRequest,
) -> Result<Vec<ProductSearchResponse>, DbErr> {
    let product = Alias::new("p");
    let latest = Alias::new("l");
    let top_list = Alias::new("t");
    let columns = ProductColumns::joined(product.clone(), latest.clone());
    let page = request.page();

    let mut select = Query::select();
    select
        .columns([
            (product.clone(), bs_product::Column::ArticleNbr),
            (product.clone(), bs_product::Column::Url),
            (product.clone(), bs_product::Column::ProductName),
            (product.clone(), bs_product::Column::Category),
            (product.clone(), bs_product::Column::Subcategory),
        ])
        .column((latest.clone(), latest_bs_product_history_entry::Column::RetrievedTimestamp))
        .column((top_list.clone(), current_bs_product_top_list::Column::CurrentRank))
        .from_as(BsProduct, product.clone())
        .join_as(
            JoinType::LeftJoin,
            LatestBsProductHistoryEntry,
            latest.clone(),
            Expr::col((
                latest.clone(),
                latest_bs_product_history_entry::Column::BsProductArticleNbr,
            ))
            .equals((product.clone(), bs_product::Column::ArticleNbr)),
        )
        .join_as(
            JoinType::LeftJoin,
            CurrentBsProductTopList,
            top_list.clone(),
            Expr::col((
                top_list.clone(),
                current_bs_product_top_list::Column::BsProductArticleNbr,
            ))
            .equals((product.clone(), bs_product::Column::ArticleNbr)),
        );

    for condition in filter_conditions(&columns, &request.filter()) {
        select.cond_where(condition);
    }

    if !request.include_dead {
        select.and_where(
            Expr::col((product.clone(), bs_product::Column::ArticleNbr)).not_in_subquery(
                Query::select()
                    .column(dead_bs_product::Column::BsProductArticleNbr)
                    .from(DeadBsProduct)
                    .and_where(Expr::col(dead_bs_product::Column::MarkedRevivedTimestamp).is_null())
                    .to_owned(),
            ),
        );
    }

    for (expr, order) in columns.order_by(&page, false) {
        select.order_by_expr(expr, order);
    }

    let (limit, offset) = page_bounds(&page);
    if let Some(limit) = limit {
        select.limit(limit);
    }
    if let Some(offset) = offset {
        select.offset(offset);
    }

    let backend = db.get_database_backend();
    let products = ProductSearchRow::find_by_statement(backend.build(&select))
        .all(db)
        .await?;

    debug!(count = products.len(), include_dead = request.include_dead, "Product search");

    if products.is_empty() {
        return Ok(Vec::new());
    }

    let article_nbrs: Vec<i32> = products.iter().map(|p| p.article_nbr).collect();
    let (mut price, mut dead) = tokio::try_join!(
        price_histories(db, &article_nbrs, request.max_product_history_entries),
        dead_histories(db, &article_nbrs, request.max_dead_product_history_entries),
    )?;

    Ok(products
        .into_iter()
        .map(|row| ProductSearchResponse {
            current_rank: row.current_rank,
            article_nbr: row.article_nbr,
            history: price.remove(&row.article_nbr).unwrap_or_default(),
            marked_dead_history: dead.remove(&row.article_nbr).unwrap_or_default(),
            url: row.url,
            product_name: row.product_name,
            category: row.category,
            subcategory: row.subcategory,
            latest_history_entry_date: row.retrieved_timestamp.map(timestamp_to_date),
        })
        .collect())
}

/// Newest first, at most `max_entries` per product
async fn price_histories(
    db: &DatabaseConnection,
    article_nbrs: &[i32],
    max_entries: Option<u64>,
) -> Result<HashMap<i32, Vec<PriceSnapshot>>, DbErr> {
    let rows = BsProductHistoryEntry::find()
        .filter(
            bs_product_history_entry::Column::BsProductArticleNbr
                .is_in(article_nbrs.iter().copied()),
        )
        .order_by_desc(bs_product_history_entry::Column::RetrievedTimestamp)
        .all(db)
        .await?;

    Ok(group_truncated(
        rows.into_iter().map(|row| (row.bs_product_article_nbr, PriceSnapshot::from(row))),
        max_entries,
    ))
}

/// Newest first, at most `max_entries` per product
async fn dead_histories(
    db: &DatabaseConnection,
    article_nbrs: &[i32],
    max_entries: Option<u64>,
) -> Result<HashMap<i32, Vec<DeadProductHistoryEntry>>, DbErr> {
    let rows = DeadBsProduct::find()
        .filter(dead_bs_product::Column::BsProductArticleNbr.is_in(article_nbrs.iter().copied()))
        .order_by_desc(dead_bs_product::Column::MarkedDeadTimestamp)
        .all(db)
        .await?;

    Ok(group_truncated(
        rows.into_iter().map(|row| (row.bs_product_article_nbr, DeadProductHistoryEntry::from(row))),
        max_entries,
    ))
}

/// Group ordered rows per article number, keeping the first `max_entries`
fn group_truncated<T>(
    rows: impl IntoIterator<Item = (i32, T)>,
    max_entries: Option<u64>,
) -> HashMap<i32, Vec<T>> {
    let max_entries = max_entries.map_or(usize::MAX, |max| usize::try_from(max).unwrap_or(usize::MAX));
    let mut grouped: HashMap<i32, Vec<T>> = HashMap::new();

    for (article_nbr, item) in rows {
        let group = grouped.entry(article_nbr).or_default();
        if group.len() < max_entries {
            group.push(item);
        }
    }

    grouped
}
