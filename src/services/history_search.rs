//! Search over every history entry ever recorded

use sea_orm::{
    sea_query::{
        Alias, Asterisk, CommonTableExpression, Expr, IntoColumnRef, JoinType, Query,
        QueryStatementBuilder, WithClause,
    },
    ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement,
};
use tracing::debug;

use crate::entities::{
    bs_product, bs_product_history_entry, bs_product_review, current_bs_product_top_list,
    prelude::*,
};
use crate::models::product::ProductHistoryEntry;
use crate::models::search::FullSearchRequest;
use crate::services::query_builder::{
    filter_conditions, page_bounds, timestamp_interval_condition, ProductColumns,
};
use crate::services::row_shaping::ProductHistoryRow;

const HISTORY_IN_INTERVAL: &str = "history_in_interval";

/// Every history entry matching the filters, with product identity, current
/// rank (absent for dead products) and review.
///
/// The retrieval date interval narrows `bs_product_history_entry` in a CTE
/// before the joins.
pub async fn search_all_history_entries(
    db: &DatabaseConnection,
    request: &FullSearchRequest,
) -> Result<Vec<ProductHistoryEntry>, DbErr> {
    let product = Alias::new("p");
    let entry = Alias::new("h");
    let top_list = Alias::new("t");
    let review = Alias::new("r");
    let columns = ProductColumns::joined(product.clone(), entry.clone());

    let mut in_interval = Query::select();
    in_interval.column(Asterisk).from(BsProductHistoryEntry);
    if let Some(interval) = &request.retrieved_date {
        let retrieved = bs_product_history_entry::Column::RetrievedTimestamp.into_column_ref();
        if let Some(condition) = timestamp_interval_condition(&retrieved, interval) {
            in_interval.cond_where(condition);
        }
    }

    let cte = CommonTableExpression::new()
        .query(in_interval)
        .table_name(Alias::new(HISTORY_IN_INTERVAL))
        .to_owned();

    let mut select = Query::select();
    select
        .columns([
            (product.clone(), bs_product::Column::ArticleNbr),
            (product.clone(), bs_product::Column::Url),
            (product.clone(), bs_product::Column::ProductName),
            (product.clone(), bs_product::Column::Category),
            (product.clone(), bs_product::Column::Subcategory),
        ])
        .columns([
            (entry.clone(), bs_product_history_entry::Column::UnitVolume),
            (entry.clone(), bs_product_history_entry::Column::UnitPrice),
            (entry.clone(), bs_product_history_entry::Column::Alcvol),
            (entry.clone(), bs_product_history_entry::Column::Apk),
            (entry.clone(), bs_product_history_entry::Column::RetrievedTimestamp),
        ])
        .column((top_list.clone(), current_bs_product_top_list::Column::CurrentRank))
        .columns([
            (review.clone(), bs_product_review::Column::ReviewScore),
            (review.clone(), bs_product_review::Column::ReviewText),
            (review.clone(), bs_product_review::Column::ReviewerName),
            (review.clone(), bs_product_review::Column::ReviewCreatedTimestamp),
        ])
        .from_as(Alias::new(HISTORY_IN_INTERVAL), entry.clone())
        .join_as(
            JoinType::InnerJoin,
            BsProduct,
            product.clone(),
            Expr::col((product.clone(), bs_product::Column::ArticleNbr)).equals((
                entry.clone(),
                bs_product_history_entry::Column::BsProductArticleNbr,
            )),
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
        )
        .join_as(
            JoinType::LeftJoin,
            BsProductReview,
            review.clone(),
            Expr::col((review.clone(), bs_product_review::Column::BsProductArticleNbr))
                .equals((product.clone(), bs_product::Column::ArticleNbr)),
        );

    for condition in filter_conditions(&columns, &request.filter) {
        select.cond_where(condition);
    }
    for (expr, order) in columns.order_by(&request.page, true) {
        select.order_by_expr(expr, order);
    }

    let (limit, offset) = page_bounds(&request.page);
    if let Some(limit) = limit {
        select.limit(limit);
    }
    if let Some(offset) = offset {
        select.offset(offset);
    }

    let query = select.with(WithClause::new().cte(cte).to_owned());

    let backend = db.get_database_backend();
    let (sql, values) = query.build_any(&*backend.get_query_builder());
    let rows = ProductHistoryRow::find_by_statement(Statement::from_sql_and_values(
        backend, sql, values.0,
    ))
    .all(db)
    .await?;

    debug!(count = rows.len(), "History entry search");

    Ok(rows.into_iter().map(ProductHistoryEntry::from).collect())
}
