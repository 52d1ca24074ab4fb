// src/lib.rs

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub mod entities {
    pub mod prelude;
    pub mod bs_product;
    pub mod bs_product_history_entry;
    pub mod bs_product_review;
    pub mod current_bs_product_top_list;
    pub mod dead_bs_product;
    pub mod latest_bs_product_history_entry;
}

pub mod models {
    pub mod error;
    pub mod lookup;
    pub mod product;
    pub mod search;
}

pub mod services {
    pub mod category;
    pub mod history_search;
    pub mod product_history;
    pub mod product_search;
    pub mod query_builder;
    pub mod review;
    pub mod row_shaping;
    pub mod top_list;
}

pub mod handlers {
    pub mod category;
    pub mod count;
    pub mod error;
    pub mod health;
    pub mod history;
    pub mod rank;
    pub mod review;
    pub mod search;
}

pub mod config;
pub mod db;

/// Every route, with CORS open to any origin and request tracing
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/bs/products/search", post(handlers::search::search_products))
        .route("/bs/products/search/current", post(handlers::search::search_current))
        .route("/bs/products/search/all", post(handlers::search::search_all))
        .route(
            "/bs/products/history/{articleNbr}",
            get(handlers::history::get_full_history),
        )
        .route("/bs/products/history", post(handlers::history::get_product_history))
        .route("/bs/products/review", post(handlers::review::get_product_reviews))
        .route("/bs/products/rank", post(handlers::rank::get_current_ranks))
        .route("/bs/products/count", get(handlers::count::get_product_count))
        .route("/bs/categories", get(handlers::category::get_all_categories))
        .route("/bs/subcategories", post(handlers::category::get_subcategories))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
