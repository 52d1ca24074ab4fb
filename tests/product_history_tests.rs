mod common;

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{build_test_router, get, post_json, BEAR_BEER, VIIKING};

#[tokio::test]
async fn test_full_history_newest_first() {
    let app = build_test_router().await;

    let (status, body) = get(&app, &format!("/bs/products/history/{}", BEAR_BEER)).await;

    assert_eq!(status, StatusCode::OK);
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 7);
    assert_eq!(history[0]["retrievedDate"], "2022-01-24T20:54:37Z");
    assert_eq!(history[6]["retrievedDate"], "2022-01-19T21:58:28Z");
    assert_eq!(history[0]["unitPrice"], 2.55);

    let dead = body["markedDeadHistory"].as_array().unwrap();
    assert_eq!(dead.len(), 1);
    assert_eq!(dead[0]["markedRevivedDate"], "2022-01-20T09:00:40Z");
}

#[tokio::test]
async fn test_full_history_of_unknown_product_is_empty() {
    let app = build_test_router().await;

    let (status, body) = get(&app, "/bs/products/history/666").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "history": [], "markedDeadHistory": [] }));
}

#[tokio::test]
async fn test_full_history_path_errors() {
    let app = build_test_router().await;

    let (status, body) = get(&app, "/bs/products/history/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = get(&app, "/bs/products/history/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_batch_history_skips_unknown_products() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        "/bs/products/history",
        json!({ "articleNbrs": [VIIKING, BEAR_BEER, 666] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let histories = body.as_object().unwrap();
    assert_eq!(histories.len(), 2);
    assert!(histories.get("666").is_none());

    let viiking = &histories[&VIIKING.to_string()];
    assert_eq!(viiking["history"].as_array().unwrap().len(), 1);
    assert!(viiking["markedDeadHistory"].as_array().unwrap().is_empty());

    let bear = &histories[&BEAR_BEER.to_string()];
    let history = bear["history"].as_array().unwrap();
    assert_eq!(history.len(), 7);
    assert_eq!(bear["markedDeadHistory"].as_array().unwrap().len(), 1);

    // Oldest first, each entry with product identity
    assert_eq!(history[0]["retrievedDate"], "2022-01-19T21:58:28Z");
    for entry in history {
        assert_eq!(entry["articleNbr"], BEAR_BEER);
        assert_eq!(entry["productName"], "Harboe Bear Beer Strong 7,7%");
    }
}

#[tokio::test]
async fn test_batch_history_requires_article_nbrs() {
    let app = build_test_router().await;

    let (status, _) = post_json(&app, "/bs/products/history", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
