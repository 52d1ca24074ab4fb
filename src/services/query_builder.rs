//! Dynamic WHERE / ORDER BY / LIMIT construction shared by the search services
//!
//! Every builder returns `None` when the request field is absent so callers
//! only ever add conditions that actually filter.

use sea_orm::{
    sea_query::{BinOper, ColumnRef, Condition, DynIden, Expr, Func, IntoIden, SimpleExpr},
    Order,
};

use crate::entities::{bs_product, bs_product_history_entry, current_bs_product_top_list};
use crate::models::search::{DateInterval, MinMaxRange, PageRequest, ProductFilter, SortKey};

/// Fully qualified columns a product filter or sort key can refer to.
///
/// Product identity and history values can live in different tables (or the
/// same view), so each search describes where to find them.
#[derive(Debug, Clone)]
pub struct ProductColumns {
    pub article_nbr: ColumnRef,
    pub product_name: ColumnRef,
    pub category: ColumnRef,
    pub subcategory: ColumnRef,
    pub unit_volume: ColumnRef,
    pub unit_price: ColumnRef,
    pub alcvol: ColumnRef,
    pub apk: ColumnRef,
    pub retrieved_timestamp: ColumnRef,
}

fn qualified(table: &DynIden, column: impl IntoIden) -> ColumnRef {
    ColumnRef::TableColumn(table.clone(), column.into_iden())
}

impl ProductColumns {
    /// Everything read from the `current_bs_product_top_list` view
    pub fn top_list() -> Self {
        use current_bs_product_top_list::Column;

        let view = current_bs_product_top_list::Entity.into_iden();
        Self {
            article_nbr: qualified(&view, Column::BsProductArticleNbr),
            product_name: qualified(&view, Column::ProductName),
            category: qualified(&view, Column::Category),
            subcategory: qualified(&view, Column::Subcategory),
            unit_volume: qualified(&view, Column::UnitVolume),
            unit_price: qualified(&view, Column::UnitPrice),
            alcvol: qualified(&view, Column::Alcvol),
            apk: qualified(&view, Column::Apk),
            retrieved_timestamp: qualified(&view, Column::RetrievedTimestamp),
        }
    }

    /// Product identity from a `bs_product` alias, values from a history
    /// shaped alias (the history table, a CTE over it, or the latest view)
    pub fn joined(product: impl IntoIden, entry: impl IntoIden) -> Self {
        use bs_product_history_entry::Column as Entry;

        let product = product.into_iden();
        let entry = entry.into_iden();
        Self {
            article_nbr: qualified(&product, bs_product::Column::ArticleNbr),
            product_name: qualified(&product, bs_product::Column::ProductName),
            category: qualified(&product, bs_product::Column::Category),
            subcategory: qualified(&product, bs_product::Column::Subcategory),
            unit_volume: qualified(&entry, Entry::UnitVolume),
            unit_price: qualified(&entry, Entry::UnitPrice),
            alcvol: qualified(&entry, Entry::Alcvol),
            apk: qualified(&entry, Entry::Apk),
            retrieved_timestamp: qualified(&entry, Entry::RetrievedTimestamp),
        }
    }

    pub fn sort_column(&self, key: SortKey) -> ColumnRef {
        match key {
            SortKey::ProductName => self.product_name.clone(),
            SortKey::Category => self.category.clone(),
            SortKey::Subcategory => self.subcategory.clone(),
            SortKey::UnitVolume => self.unit_volume.clone(),
            SortKey::UnitPrice => self.unit_price.clone(),
            SortKey::Alcvol => self.alcvol.clone(),
            SortKey::Apk => self.apk.clone(),
            SortKey::ArticleNbr => self.article_nbr.clone(),
            SortKey::RetrievedDate => self.retrieved_timestamp.clone(),
        }
    }

    /// Requested order first, then article number, then (for history rows)
    /// newest entry first
    pub fn order_by(&self, page: &PageRequest, with_timestamp: bool) -> Vec<(SimpleExpr, Order)> {
        let sort = page.sort_order_or_default();
        let mut order = vec![
            (SimpleExpr::Column(self.sort_column(sort.key)), sort.order.into()),
            (SimpleExpr::Column(self.article_nbr.clone()), Order::Asc),
        ];
        if with_timestamp {
            order.push((SimpleExpr::Column(self.retrieved_timestamp.clone()), Order::Desc));
        }
        order
    }
}

/// `col >= min AND col <= max`, either side optional
pub fn interval_condition(col: &ColumnRef, range: &MinMaxRange) -> Option<Condition> {
    if range.min.is_none() && range.max.is_none() {
        return None;
    }

    let mut condition = Condition::all();
    if let Some(min) = range.min {
        condition = condition.add(Expr::col(col.clone()).gte(min));
    }
    if let Some(max) = range.max {
        condition = condition.add(Expr::col(col.clone()).lte(max));
    }
    Some(condition)
}

/// Inclusive bounds on an epoch-millisecond column
pub fn timestamp_interval_condition(col: &ColumnRef, interval: &DateInterval) -> Option<Condition> {
    let start = interval.start_timestamp();
    let end = interval.end_timestamp();
    if start.is_none() && end.is_none() {
        return None;
    }

    let mut condition = Condition::all();
    if let Some(start) = start {
        condition = condition.add(Expr::col(col.clone()).gte(start));
    }
    if let Some(end) = end {
        condition = condition.add(Expr::col(col.clone()).lte(end));
    }
    Some(condition)
}

/// `LOWER(col) LIKE LOWER('%value%')` for each value, ORed together.
/// An empty list matches nothing.
///
/// Both sides are folded by the database, so a value always matches text of
/// the same case. SQLite's `LOWER` only folds ASCII, so there "Äppel" does
/// not match "äppel"; Postgres folds the whole alphabet.
pub fn any_like_condition(col: &ColumnRef, values: &[String]) -> Condition {
    if values.is_empty() {
        return Condition::all().add(Expr::col(col.clone()).is_in(Vec::<String>::new()));
    }

    values.iter().fold(Condition::any(), |condition, value| {
        let pattern = Func::lower(Expr::val(format!("%{value}%")));
        condition.add(
            Expr::expr(Func::lower(Expr::col(col.clone()))).binary(BinOper::Like, pattern),
        )
    })
}

/// `col IN (...)`; an empty list matches nothing
pub fn in_condition<V>(col: &ColumnRef, values: &[V]) -> Condition
where
    V: Into<SimpleExpr> + Clone,
{
    Condition::all().add(Expr::col(col.clone()).is_in(values.iter().cloned()))
}

/// One condition per filter present in the request, to be ANDed by the caller
pub fn filter_conditions(columns: &ProductColumns, filter: &ProductFilter) -> Vec<Condition> {
    let mut conditions = Vec::new();

    if let Some(names) = &filter.product_name {
        conditions.push(any_like_condition(&columns.product_name, names));
    }
    if let Some(categories) = &filter.category {
        conditions.push(in_condition(&columns.category, categories));
    }
    if let Some(subcategories) = &filter.subcategory {
        conditions.push(in_condition(&columns.subcategory, subcategories));
    }
    if let Some(article_nbrs) = &filter.article_nbr {
        conditions.push(in_condition(&columns.article_nbr, article_nbrs));
    }

    let ranges = [
        (&columns.unit_volume, &filter.unit_volume),
        (&columns.unit_price, &filter.unit_price),
        (&columns.alcvol, &filter.alcvol),
        (&columns.apk, &filter.apk),
    ];
    conditions.extend(
        ranges
            .into_iter()
            .filter_map(|(col, range)| range.as_ref().and_then(|r| interval_condition(col, r))),
    );

    conditions
}

/// `(limit, offset)` for a page request. An offset without a limit still
/// needs a LIMIT clause on SQLite, so it gets an unbounded one.
pub fn page_bounds(page: &PageRequest) -> (Option<u64>, Option<u64>) {
    match (page.max_items, page.offset) {
        (None, Some(offset)) => (Some(i64::MAX as u64), Some(offset)),
        (limit, offset) => (limit, offset),
    }
}
