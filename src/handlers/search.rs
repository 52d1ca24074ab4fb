//! Search handlers
//!
//! - POST /bs/products/search/current: the current top list
//! - POST /bs/products/search/all: every history entry
//! - POST /bs/products/search: products with nested history

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::handlers::error::{bad_request, database_error, json_rejection, ApiError};
use crate::models::product::{ProductHistoryEntry, ProductSearchResponse};
use crate::models::search::{FullSearchRequest, ProductSearchRequest, TopListSearchRequest};
use crate::services::{history_search, product_search, top_list};
use crate::AppState;

/// POST /bs/products/search/current
///
/// # Response
/// - 200: Top list entries, each with `currentRank`
/// - 400: Invalid filters, sort order or pagination
/// - 500: Database error
pub async fn search_current(
    State(state): State<AppState>,
    body: Result<Json<TopListSearchRequest>, JsonRejection>,
) -> Result<Json<Vec<ProductHistoryEntry>>, ApiError> {
    let Json(request) = body.map_err(json_rejection)?;
    request.validate().map_err(bad_request)?;

    info!(
        max_items = request.page.max_items,
        offset = request.page.offset,
        "Top list search request"
    );

    let entries = top_list::search_top_list(&state.db, &request)
        .await
        .map_err(database_error)?;

    info!(count = entries.len(), "Top list search returned");

    Ok(Json(entries))
}

/// POST /bs/products/search/all
///
/// # Response
/// - 200: History entries; `currentRank` only for live products
/// - 400: Invalid filters, date interval, sort order or pagination
/// - 500: Database error
pub async fn search_all(
    State(state): State<AppState>,
    body: Result<Json<FullSearchRequest>, JsonRejection>,
) -> Result<Json<Vec<ProductHistoryEntry>>, ApiError> {
    let Json(request) = body.map_err(json_rejection)?;
    request.validate().map_err(bad_request)?;

    info!(
        max_items = request.page.max_items,
        offset = request.page.offset,
        has_interval = request.retrieved_date.is_some(),
        "History entry search request"
    );

    let entries = history_search::search_all_history_entries(&state.db, &request)
        .await
        .map_err(database_error)?;

    info!(count = entries.len(), "History entry search returned");

    Ok(Json(entries))
}

/// POST /bs/products/search
pub async fn search_products(
    State(state): State<AppState>,
    body: Result<Json<ProductSearchRequest>, JsonRejection>,
) -> Result<Json<Vec<ProductSearchResponse>>, ApiError> {
    let Json(request) = body.map_err(json_rejection)?;
    request.validate().map_err(bad_request)?;

    info!(
        include_dead = request.include_dead,
        max_items = request.max_items,
        offset = request.offset,
        "Product search request"
    );

    let products = product_search::search_products(&state.db, &request)
        .await
        .map_err(database_error)?;

    Ok(Json(products))
}
