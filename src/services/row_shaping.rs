//! Conversion from database rows to API shapes

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use tracing::warn;

use crate::entities::{
    bs_product, bs_product_history_entry, bs_product_review, current_bs_product_top_list,
    dead_bs_product,
};
use crate::models::product::{
    DeadProductHistoryEntry, PriceSnapshot, ProductHistoryEntry, ProductReview,
};

/// Epoch milliseconds as a UTC date. Out-of-range values are logged and
/// shown as the epoch.
pub fn timestamp_to_date(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(timestamp).unwrap_or_else(|| {
        warn!(timestamp, "Stored timestamp is out of range, using the epoch");
        DateTime::<Utc>::default()
    })
}

impl From<bs_product_history_entry::Model> for PriceSnapshot {
    fn from(entry: bs_product_history_entry::Model) -> Self {
        Self {
            unit_volume: entry.unit_volume,
            unit_price: entry.unit_price,
            alcvol: entry.alcvol,
            apk: entry.apk,
            retrieved_date: timestamp_to_date(entry.retrieved_timestamp),
        }
    }
}

impl From<dead_bs_product::Model> for DeadProductHistoryEntry {
    fn from(marker: dead_bs_product::Model) -> Self {
        Self {
            marked_dead_date: timestamp_to_date(marker.marked_dead_timestamp),
            marked_revived_date: marker.marked_revived_timestamp.map(timestamp_to_date),
        }
    }
}

impl From<bs_product_review::Model> for ProductReview {
    fn from(review: bs_product_review::Model) -> Self {
        Self {
            score: review.review_score,
            text: review.review_text,
            reviewer_name: review.reviewer_name,
            created_date: timestamp_to_date(review.review_created_timestamp),
        }
    }
}

/// A top list row, always ranked
pub fn top_list_entry(
    row: current_bs_product_top_list::Model,
    review: Option<bs_product_review::Model>,
) -> ProductHistoryEntry {
    ProductHistoryEntry {
        article_nbr: row.bs_product_article_nbr,
        url: row.url,
        product_name: row.product_name,
        category: row.category,
        subcategory: row.subcategory,
        unit_volume: row.unit_volume,
        unit_price: row.unit_price,
        alcvol: row.alcvol,
        apk: row.apk,
        retrieved_date: timestamp_to_date(row.retrieved_timestamp),
        current_rank: Some(row.current_rank),
        review: review.map(ProductReview::from),
    }
}

/// A plain history entry with product identity, without rank or review
pub fn product_history_entry(
    product: &bs_product::Model,
    entry: bs_product_history_entry::Model,
) -> ProductHistoryEntry {
    ProductHistoryEntry {
        article_nbr: product.article_nbr,
        url: product.url.clone(),
        product_name: product.product_name.clone(),
        category: product.category.clone(),
        subcategory: product.subcategory.clone(),
        unit_volume: entry.unit_volume,
        unit_price: entry.unit_price,
        alcvol: entry.alcvol,
        apk: entry.apk,
        retrieved_date: timestamp_to_date(entry.retrieved_timestamp),
        current_rank: None,
        review: None,
    }
}

/// History entry joined with its product, rank and review
#[derive(Debug, FromQueryResult)]
pub struct ProductHistoryRow {
    pub article_nbr: i32,
    pub url: String,
    pub product_name: String,
    pub category: String,
    pub subcategory: String,
    pub unit_volume: f64,
    pub unit_price: f64,
    pub alcvol: f64,
    pub apk: f64,
    pub retrieved_timestamp: i64,
    pub current_rank: Option<i64>,
    pub review_score: Option<f64>,
    pub review_text: Option<String>,
    pub reviewer_name: Option<String>,
    pub review_created_timestamp: Option<i64>,
}

impl From<ProductHistoryRow> for ProductHistoryEntry {
    fn from(row: ProductHistoryRow) -> Self {
        let review = match (
            row.review_score,
            row.review_text,
            row.reviewer_name,
            row.review_created_timestamp,
        ) {
            (Some(score), Some(text), Some(reviewer_name), Some(created)) => Some(ProductReview {
                score,
                text,
                reviewer_name,
                created_date: timestamp_to_date(created),
            }),
            _ => None,
        };

        Self {
            article_nbr: row.article_nbr,
            url: row.url,
            product_name: row.product_name,
            category: row.category,
            subcategory: row.subcategory,
            unit_volume: row.unit_volume,
            unit_price: row.unit_price,
            alcvol: row.alcvol,
            apk: row.apk,
            retrieved_date: timestamp_to_date(row.retrieved_timestamp),
            current_rank: row.current_rank,
            review,
        }
    }
}

/// Product with the timestamp of its latest entry and its rank while live
#[derive(Debug, FromQueryResult)]
pub struct ProductSearchRow {
    pub article_nbr: i32,
    pub url: String,
    pub product_name: String,
    pub category: String,
    pub subcategory: String,
    pub retrieved_timestamp: Option<i64>,
    pub current_rank: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn viiking_row(with_review: bool) -> ProductHistoryRow {
        ProductHistoryRow {
            article_nbr: 2110205,
            url: "https://example.com/viiking".to_string(),
            product_name: "Harboe Viiking Strong Beer 12,0%".to_string(),
            category: "Öl & Cider".to_string(),
            subcategory: "Dansk Öl".to_string(),
            unit_volume: 33.0,
            unit_price: 4.25,
            alcvol: 12.0,
            apk: 9.324009324009324,
            retrieved_timestamp: 1_642_629_529_000,
            current_rank: Some(2),
            review_score: with_review.then_some(4.5),
            review_text: with_review.then(|| "Helt enkelt bäst.".to_string()),
            reviewer_name: with_review.then(|| "Emil".to_string()),
            review_created_timestamp: with_review.then_some(1_642_629_547_000),
        }
    }

    #[test]
    fn test_timestamp_to_date_is_millisecond_precise() {
        assert_eq!(
            timestamp_to_date(1_642_629_529_000),
            Utc.with_ymd_and_hms(2022, 1, 19, 21, 58, 49).unwrap()
        );
        assert_eq!(timestamp_to_date(1_500).timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_timestamp_out_of_range_falls_back_to_epoch() {
        assert_eq!(timestamp_to_date(i64::MAX).timestamp_millis(), 0);
    }

    #[test]
    fn test_dead_marker_uses_revived_timestamp() {
        let marker = dead_bs_product::Model {
            bs_product_article_nbr: 2033433,
            marked_dead_timestamp: 1_000,
            marked_revived_timestamp: Some(5_000),
        };

        let entry = DeadProductHistoryEntry::from(marker);

        assert_eq!(entry.marked_dead_date, timestamp_to_date(1_000));
        assert_eq!(entry.marked_revived_date, Some(timestamp_to_date(5_000)));
    }

    #[test]
    fn test_history_row_with_review() {
        let entry = ProductHistoryEntry::from(viiking_row(true));

        let review = entry.review.expect("review should be present");
        assert_eq!(review.score, 4.5);
        assert_eq!(review.reviewer_name, "Emil");
        assert_eq!(entry.current_rank, Some(2));
        assert_eq!(entry.retrieved_date, Utc.with_ymd_and_hms(2022, 1, 19, 21, 58, 49).unwrap());
    }

    #[test]
    fn test_history_row_without_review() {
        let entry = ProductHistoryEntry::from(viiking_row(false));

        assert!(entry.review.is_none());
    }
}
