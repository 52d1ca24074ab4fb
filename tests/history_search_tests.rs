mod common;

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{
    article_nbrs, build_test_router, post_json, BEAR_BEER, CHENIN_BLANC, MERLOT, VIIKING,
};

const ROUTE: &str = "/bs/products/search/all";

#[tokio::test]
async fn test_empty_search_returns_every_history_entry() {
    let app = build_test_router().await;

    let (status, body) = post_json(&app, ROUTE, json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 15);

    // Dead products have no rank
    for entry in entries {
        if entry["articleNbr"] == CHENIN_BLANC {
            assert!(entry.get("currentRank").is_none());
        } else {
            assert!(entry["currentRank"].is_i64());
        }
    }

    let viiking = entries
        .iter()
        .find(|e| e["articleNbr"] == VIIKING)
        .unwrap();
    assert_eq!(viiking["currentRank"], 2);
    assert_eq!(viiking["review"]["reviewerName"], "Emil");
}

#[tokio::test]
async fn test_retrieved_date_interval() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        ROUTE,
        json!({
            "retrievedDate": {
                "start": "2022-01-20T00:00:00Z",
                "end": "2022-01-20T23:59:59Z"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 8);

    let (status, body) = post_json(
        &app,
        ROUTE,
        json!({ "retrievedDate": { "start": "2022-01-24T00:00:00Z" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_retrieved_date_with_one_bound() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        ROUTE,
        json!({ "retrievedDate": { "end": "2022-01-19T23:59:59Z" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let mut found = article_nbrs(&body);
    found.sort();
    assert_eq!(
        found,
        vec![
            i64::from(BEAR_BEER),
            i64::from(BEAR_BEER),
            i64::from(MERLOT),
            i64::from(VIIKING)
        ]
    );

    // Inclusive upper bound on its own
    let (status, body) = post_json(
        &app,
        ROUTE,
        json!({ "retrievedDate": { "end": "2022-01-19T21:56:57Z" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(article_nbrs(&body), vec![i64::from(MERLOT)]);

    // Inclusive lower bound on its own
    let (status, body) = post_json(
        &app,
        ROUTE,
        json!({ "retrievedDate": { "start": "2022-01-24T20:54:52Z" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(article_nbrs(&body), vec![i64::from(CHENIN_BLANC)]);
}

#[tokio::test]
async fn test_retrieved_date_bounds_are_inclusive() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        ROUTE,
        json!({
            "retrievedDate": {
                "start": "2022-01-19T21:58:49Z",
                "end": "2022-01-19T21:58:49Z"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(article_nbrs(&body), vec![i64::from(VIIKING)]);
}

#[tokio::test]
async fn test_sort_by_retrieved_date() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        ROUTE,
        json!({ "sortOrder": { "key": "retrievedDate", "order": "asc" }, "maxItems": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(article_nbrs(&body), vec![i64::from(MERLOT)]);
    assert_eq!(body[0]["retrievedDate"], "2022-01-19T21:56:57Z");
}

#[tokio::test]
async fn test_filters_apply_to_every_entry() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        ROUTE,
        json!({ "productName": ["bear beer"], "maxItems": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(article_nbrs(&body), vec![i64::from(BEAR_BEER); 3]);

    // Same APK for every entry, so newest first after the article tiebreak
    let dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["retrievedDate"].as_str().unwrap())
        .collect();
    assert_eq!(
        dates,
        vec!["2022-01-24T20:54:37Z", "2022-01-20T09:00:55Z", "2022-01-20T09:00:53Z"]
    );
}

#[tokio::test]
async fn test_inverted_interval_is_rejected() {
    let app = build_test_router().await;

    let (status, body) = post_json(
        &app,
        ROUTE,
        json!({
            "retrievedDate": {
                "start": "2022-01-21T00:00:00Z",
                "end": "2022-01-20T00:00:00Z"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("retrievedDate"));

    let (status, _) = post_json(
        &app,
        ROUTE,
        json!({ "retrievedDate": { "start": "yesterday" } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
