//! Response shapes for product, history and review endpoints.
//!
//! Database rows use snake_case columns and epoch-millisecond timestamps;
//! everything here is camelCase with RFC 3339 dates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price/attribute values of a single history entry, without product identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub unit_volume: f64,
    pub unit_price: f64,
    pub alcvol: f64,
    pub apk: f64,
    pub retrieved_date: DateTime<Utc>,
}

/// A history entry together with the product it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHistoryEntry {
    pub article_nbr: i32,
    pub url: String,
    pub product_name: String,
    pub category: String,
    pub subcategory: String,
    pub unit_volume: f64,
    pub unit_price: f64,
    pub alcvol: f64,
    pub apk: f64,
    pub retrieved_date: DateTime<Utc>,
    /// Rank in the current top list, absent for dead products
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_rank: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<ProductReview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReview {
    pub score: f64,
    pub text: String,
    pub reviewer_name: String,
    pub created_date: DateTime<Utc>,
}

/// One interval during which the product was delisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadProductHistoryEntry {
    pub marked_dead_date: DateTime<Utc>,
    /// `null` while the product is still dead
    pub marked_revived_date: Option<DateTime<Utc>>,
}

/// A product with its (possibly truncated) history, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_rank: Option<i64>,
    pub article_nbr: i32,
    pub url: String,
    pub product_name: String,
    pub category: String,
    pub subcategory: String,
    pub latest_history_entry_date: Option<DateTime<Utc>>,
    pub history: Vec<PriceSnapshot>,
    pub marked_dead_history: Vec<DeadProductHistoryEntry>,
}

/// Full history of a single product, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullHistoryResponse {
    pub history: Vec<PriceSnapshot>,
    pub marked_dead_history: Vec<DeadProductHistoryEntry>,
}

/// History of one product in a batch lookup, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHistoryResponse {
    pub history: Vec<ProductHistoryEntry>,
    pub marked_dead_history: Vec<DeadProductHistoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCountResponse {
    /// Products in the current top list
    pub current: u64,
    /// Every product ever seen
    pub all: u64,
}
