//! Search request models
//!
//! Shared by the three search endpoints:
//! - POST /bs/products/search/current (top list)
//! - POST /bs/products/search/all (every history entry)
//! - POST /bs/products/search (products with nested history)

use chrono::{DateTime, Utc};
use sea_orm::Order;
use serde::Deserialize;

/// Inclusive numeric bounds, either side optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct MinMaxRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MinMaxRange {
    pub fn validate(&self, field: &str) -> Result<(), String> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(format!(
                "{field}.min ({min}) must not be greater than {field}.max ({max})"
            )),
            _ => Ok(()),
        }
    }
}

/// Inclusive date bounds, either side optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct DateInterval {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateInterval {
    pub fn validate(&self, field: &str) -> Result<(), String> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => Err(format!(
                "{field}.start ({start}) must not be after {field}.end ({end})"
            )),
            _ => Ok(()),
        }
    }

    pub fn start_timestamp(&self) -> Option<i64> {
        self.start.map(|d| d.timestamp_millis())
    }

    pub fn end_timestamp(&self) -> Option<i64> {
        self.end.map(|d| d.timestamp_millis())
    }
}

/// Sortable product properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    ProductName,
    Category,
    Subcategory,
    UnitVolume,
    UnitPrice,
    Alcvol,
    Apk,
    ArticleNbr,
    RetrievedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// Both properties are required once `sortOrder` is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub order: SortDirection,
}

impl Default for SortOrder {
    /// Best APK first
    fn default() -> Self {
        Self {
            key: SortKey::Apk,
            order: SortDirection::Desc,
        }
    }
}

/// Filters on product identity and on history entry values.
/// A missing field does not filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Case-insensitive substrings, any of which may match
    pub product_name: Option<Vec<String>>,
    pub category: Option<Vec<String>>,
    pub subcategory: Option<Vec<String>>,
    pub unit_volume: Option<MinMaxRange>,
    pub unit_price: Option<MinMaxRange>,
    pub alcvol: Option<MinMaxRange>,
    pub apk: Option<MinMaxRange>,
    pub article_nbr: Option<Vec<i32>>,
}

impl ProductFilter {
    pub fn validate(&self) -> Result<(), String> {
        let ranges = [
            ("unitVolume", &self.unit_volume),
            ("unitPrice", &self.unit_price),
            ("alcvol", &self.alcvol),
            ("apk", &self.apk),
        ];

        for (field, range) in ranges {
            if let Some(range) = range {
                range.validate(field)?;
            }
        }

        Ok(())
    }
}

/// Sorting and pagination
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub max_items: Option<u64>,
    pub offset: Option<u64>,
    pub sort_order: Option<SortOrder>,
}

/// LIMIT and OFFSET are signed 64-bit in SQL
const MAX_PAGE_VALUE: u64 = i64::MAX as u64;

impl PageRequest {
    pub fn validate(&self) -> Result<(), String> {
        let bounds = [("maxItems", self.max_items), ("offset", self.offset)];

        for (field, value) in bounds {
            if let Some(value) = value.filter(|v| *v > MAX_PAGE_VALUE) {
                return Err(format!("{field} ({value}) must not exceed {MAX_PAGE_VALUE}"));
            }
        }

        Ok(())
    }

    pub fn sort_order_or_default(&self) -> SortOrder {
        self.sort_order.unwrap_or_default()
    }
}

/// Body of POST /bs/products/search/current
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopListSearchRequest {
    #[serde(flatten)]
    pub filter: ProductFilter,
    #[serde(flatten)]
    pub page: PageRequest,
}

impl TopListSearchRequest {
    pub fn validate(&self) -> Result<(), String> {
        self.filter.validate()?;
        self.page.validate()
    }
}

/// Body of POST /bs/products/search/all
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullSearchRequest {
    #[serde(flatten)]
    pub filter: ProductFilter,
    #[serde(flatten)]
    pub page: PageRequest,
    pub retrieved_date: Option<DateInterval>,
}

impl FullSearchRequest {
    pub fn validate(&self) -> Result<(), String> {
        self.filter.validate()?;
        self.page.validate()?;
        if let Some(interval) = &self.retrieved_date {
            interval.validate("retrievedDate")?;
        }
        Ok(())
    }
}

/// Body of POST /bs/products/search
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchRequest {
    /// Case-insensitive substring of the product name
    pub product_name: Option<String>,
    pub category: Option<Vec<String>>,
    pub subcategory: Option<Vec<String>>,
    pub unit_volume: Option<MinMaxRange>,
    pub unit_price: Option<MinMaxRange>,
    pub alcvol: Option<MinMaxRange>,
    pub apk: Option<MinMaxRange>,
    pub article_nbr: Option<Vec<i32>>,
    pub max_items: Option<u64>,
    pub offset: Option<u64>,
    pub sort_order: Option<SortOrder>,
    /// Required: whether currently dead products are returned
    pub include_dead: bool,
    pub max_product_history_entries: Option<u64>,
    pub max_dead_product_history_entries: Option<u64>,
}

impl ProductSearchRequest {
    pub fn validate(&self) -> Result<(), String> {
        self.filter().validate()?;
        self.page().validate()
    }

    /// The request's filters in the shape shared with the other searches
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            product_name: self.product_name.clone().map(|name| vec![name]),
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            unit_volume: self.unit_volume,
            unit_price: self.unit_price,
            alcvol: self.alcvol,
            apk: self.apk,
            article_nbr: self.article_nbr.clone(),
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest {
            max_items: self.max_items,
            offset: self.offset,
            sort_order: self.sort_order,
        }
    }
}
