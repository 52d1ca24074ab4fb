//! Product history handlers

use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::info;

use crate::handlers::error::{database_error, json_rejection, path_rejection, ApiError};
use crate::models::lookup::ArticleNbrsRequest;
use crate::models::product::{FullHistoryResponse, ProductHistoryResponse};
use crate::services::product_history;
use crate::AppState;

/// GET /bs/products/history/{articleNbr}
///
/// Returns the whole price and dead-marker history of one product, newest
/// first. Unknown products get empty lists.
///
/// # Response
/// - 200: History
/// - 400: Article number is not an integer
/// - 500: Database error
pub async fn get_full_history(
    State(state): State<AppState>,
    article_nbr: Result<Path<i32>, PathRejection>,
) -> Result<Json<FullHistoryResponse>, ApiError> {
    let Path(article_nbr) = article_nbr.map_err(path_rejection)?;

    info!(article_nbr, "Fetching full product history");

    let history = product_history::get_full_history(&state.db, article_nbr)
        .await
        .map_err(database_error)?;

    info!(
        article_nbr,
        entries = history.history.len(),
        dead_entries = history.marked_dead_history.len(),
        "Full product history returned"
    );

    Ok(Json(history))
}

/// POST /bs/products/history
///
/// Oldest first, keyed by article number. Unknown article numbers are absent.
pub async fn get_product_history(
    State(state): State<AppState>,
    body: Result<Json<ArticleNbrsRequest>, JsonRejection>,
) -> Result<Json<HashMap<i32, ProductHistoryResponse>>, ApiError> {
    let Json(request) = body.map_err(json_rejection)?;

    info!(requested = request.article_nbrs.len(), "Fetching product histories");

    let histories = product_history::get_product_history(&state.db, &request.article_nbrs)
        .await
        .map_err(database_error)?;

    Ok(Json(histories))
}
