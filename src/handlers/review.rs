use std::collections::HashMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::handlers::error::{database_error, json_rejection, ApiError};
use crate::models::lookup::ArticleNbrsRequest;
use crate::models::product::ProductReview;
use crate::services::review;
use crate::AppState;

/// POST /bs/products/review
///
/// Every requested article number is a key; products without a review map
/// to `null`.
pub async fn get_product_reviews(
    State(state): State<AppState>,
    body: Result<Json<ArticleNbrsRequest>, JsonRejection>,
) -> Result<Json<HashMap<i32, Option<ProductReview>>>, ApiError> {
    let Json(request) = body.map_err(json_rejection)?;

    info!(requested = request.article_nbrs.len(), "Fetching product reviews");

    let reviews = review::get_product_reviews(&state.db, &request.article_nbrs)
        .await
        .map_err(database_error)?;

    Ok(Json(reviews))
}
