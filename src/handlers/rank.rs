use std::collections::HashMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::handlers::error::{database_error, json_rejection, ApiError};
use crate::models::lookup::ArticleNbrsRequest;
use crate::services::top_list;
use crate::AppState;

/// POST /bs/products/rank
///
/// Current rank per live product. Dead and unknown products are absent.
pub async fn get_current_ranks(
    State(state): State<AppState>,
    body: Result<Json<ArticleNbrsRequest>, JsonRejection>,
) -> Result<Json<HashMap<i32, i64>>, ApiError> {
    let Json(request) = body.map_err(json_rejection)?;

    let ranks = top_list::get_current_ranks(&state.db, &request.article_nbrs)
        .await
        .map_err(database_error)?;

    info!(
        requested = request.article_nbrs.len(),
        ranked = ranks.len(),
        "Current ranks returned"
    );

    Ok(Json(ranks))
}
