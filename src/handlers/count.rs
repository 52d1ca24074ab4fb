use axum::{extract::State, Json};

use crate::handlers::error::{database_error, ApiError};
use crate::models::product::ProductCountResponse;
use crate::services::top_list;
use crate::AppState;

/// GET /bs/products/count
pub async fn get_product_count(
    State(state): State<AppState>,
) -> Result<Json<ProductCountResponse>, ApiError> {
    let count = top_list::count_products(&state.db)
        .await
        .map_err(database_error)?;

    Ok(Json(count))
}
