use std::collections::BTreeMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::handlers::error::{database_error, json_rejection, ApiError};
use crate::models::lookup::CategoriesRequest;
use crate::services::category;
use crate::AppState;

/// GET /bs/categories
///
/// Every category with its sorted, distinct subcategories.
pub async fn get_all_categories(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<String>>>, ApiError> {
    let categories = category::get_all_categories(&state.db)
        .await
        .map_err(database_error)?;

    info!(count = categories.len(), "Categories returned");

    Ok(Json(categories))
}

/// POST /bs/subcategories
///
/// Every requested category is a key; unknown categories map to `[]`.
pub async fn get_subcategories(
    State(state): State<AppState>,
    body: Result<Json<CategoriesRequest>, JsonRejection>,
) -> Result<Json<BTreeMap<String, Vec<String>>>, ApiError> {
    let Json(request) = body.map_err(json_rejection)?;

    let subcategories = category::get_subcategories(&state.db, &request.categories)
        .await
        .map_err(database_error)?;

    Ok(Json(subcategories))
}
