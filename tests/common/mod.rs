#![allow(dead_code)]

use apk_api::entities::{
    bs_product, bs_product_history_entry, bs_product_review, dead_bs_product, prelude::*,
};
use apk_api::{db, router, AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDateTime;
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use std::env;
use tower::ServiceExt;

pub const BEAR_BEER: i32 = 2033433;
pub const LUXURY_GOLD: i32 = 2033436;
pub const CHENIN_BLANC: i32 = 2034031;
pub const MINTTU: i32 = 2043913;
pub const MERLOT: i32 = 2108382;
pub const VIIKING: i32 = 2110205;

pub const BEAR_BEER_APK: f64 = 9.974093264248705;
pub const VIIKING_APK: f64 = 9.324009324009324;

/// Set up a migrated test database
/// Uses TEST_DATABASE_URL environment variable or falls back to in-memory SQLite
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url =
        env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    let db = db::connect(&database_url, 1).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Migrated database with the fixture products
pub async fn setup_seeded_db() -> DatabaseConnection {
    let db = setup_test_db().await.expect("Failed to set up test DB");
    seed(&db).await.expect("Failed to seed test DB");
    db
}

/// Router over a seeded database
pub async fn build_test_router() -> Router {
    router_over(setup_seeded_db().await)
}

/// Router over a database the test has already prepared
pub fn router_over(db: DatabaseConnection) -> Router {
    router(AppState { db })
}

/// Epoch milliseconds of a UTC `YYYY-MM-DD HH:MM:SS` time
pub fn ts(datetime: &str) -> i64 {
    NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S")
        .expect("valid fixture timestamp")
        .and_utc()
        .timestamp_millis()
}

pub fn product(article_nbr: i32, slug: &str, name: &str, category: &str, subcategory: &str) -> bs_product::ActiveModel {
    bs_product::ActiveModel {
        article_nbr: Set(article_nbr),
        url: Set(format!("https://www.bordershop.com/se/{}-{}", slug, article_nbr)),
        product_name: Set(name.to_string()),
        category: Set(category.to_string()),
        subcategory: Set(subcategory.to_string()),
    }
}

pub fn entry(
    article_nbr: i32,
    retrieved: &str,
    unit_volume: f64,
    unit_price: f64,
    alcvol: f64,
    apk: f64,
) -> bs_product_history_entry::ActiveModel {
    bs_product_history_entry::ActiveModel {
        bs_product_article_nbr: Set(article_nbr),
        retrieved_timestamp: Set(ts(retrieved)),
        unit_volume: Set(unit_volume),
        unit_price: Set(unit_price),
        alcvol: Set(alcvol),
        apk: Set(apk),
    }
}

pub fn dead_marker(article_nbr: i32, dead: &str, revived: Option<&str>) -> dead_bs_product::ActiveModel {
    dead_bs_product::ActiveModel {
        bs_product_article_nbr: Set(article_nbr),
        marked_dead_timestamp: Set(ts(dead)),
        marked_revived_timestamp: Set(revived.map(ts)),
    }
}

/// Six products: Chenin Blanc is currently dead, Bear Beer was dead for ten
/// seconds on 2022-01-20, Viiking has the only review.
pub async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    BsProduct::insert_many([
        product(BEAR_BEER, "ol-cider/dansk-ol/harboe-bear-beer-strong-77", "Harboe Bear Beer Strong 7,7%", "Öl & Cider", "Dansk Öl"),
        product(LUXURY_GOLD, "ol-cider/dansk-ol/harboe-luxury-beer-gold-59", "Harboe Luxury Beer Gold 5,9%", "Öl & Cider", "Dansk Öl"),
        product(CHENIN_BLANC, "vin/vitt-vin/sydafrika/drostdy-hof-chenin-blanc-steen", "Drostdy-Hof Chenin Blanc Steen", "Vin", "Vitt vin"),
        product(MINTTU, "sprit/likor/minttu-original-black-mint-35", "Minttu Original Black Mint 35%", "Sprit", "Likör"),
        product(MERLOT, "vin/rott-vin/sydafrika/drostdy-hof-shiraz-merlot", "Drostdy-Hof Shiraz Merlot", "Vin", "Rött vin"),
        product(VIIKING, "ol-cider/dansk-ol/harboe-viiking-strong-beer-120", "Harboe Viiking Strong Beer 12,0%", "Öl & Cider", "Dansk Öl"),
    ])
    .exec_without_returning(db)
    .await?;

    let bear = |retrieved| entry(BEAR_BEER, retrieved, 33.0, 2.55, 7.7, BEAR_BEER_APK);
    let minttu = |retrieved| entry(MINTTU, retrieved, 50.0, 88.33, 35.0, 1.981206837993886);

    BsProductHistoryEntry::insert_many([
        entry(MERLOT, "2022-01-19 21:56:57", 300.0, 61.17, 13.5, 6.620892594409024),
        bear("2022-01-19 21:58:28"),
        bear("2022-01-19 21:58:33"),
        entry(VIIKING, "2022-01-19 21:58:49", 33.0, 4.25, 12.0, VIIKING_APK),
        minttu("2022-01-20 08:59:06"),
        bear("2022-01-20 09:00:23"),
        minttu("2022-01-20 09:00:40"),
        bear("2022-01-20 09:00:43"),
        bear("2022-01-20 09:00:53"),
        bear("2022-01-20 09:00:55"),
        minttu("2022-01-20 09:01:20"),
        minttu("2022-01-20 09:01:22"),
        entry(LUXURY_GOLD, "2022-01-24 20:54:25", 33.0, 2.68, 5.9, 7.257072570725708),
        bear("2022-01-24 20:54:37"),
        entry(CHENIN_BLANC, "2022-01-24 20:54:52", 300.0, 61.17, 12.0, 5.88523786169691),
    ])
    .exec_without_returning(db)
    .await?;

    DeadBsProduct::insert_many([
        dead_marker(BEAR_BEER, "2022-01-20 09:00:30", Some("2022-01-20 09:00:40")),
        dead_marker(CHENIN_BLANC, "2022-01-24 20:57:49", None),
    ])
    .exec_without_returning(db)
    .await?;

    BsProductReview::insert(bs_product_review::ActiveModel {
        bs_product_article_nbr: Set(VIIKING),
        review_score: Set(4.5),
        review_text: Set("Helt enkelt bäst.\nSmaken är som baken, smakar mest skit.".to_string()),
        reviewer_name: Set("Emil".to_string()),
        review_created_timestamp: Set(ts("2022-01-19 21:59:07")),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap(),
    )
    .await
}

/// Article numbers of a JSON array of entries, in order
pub fn article_nbrs(entries: &Value) -> Vec<i64> {
    entries
        .as_array()
        .expect("array body")
        .iter()
        .map(|e| e["articleNbr"].as_i64().expect("articleNbr"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        assert!(db.is_ok(), "Test database setup should succeed");
    }
}
