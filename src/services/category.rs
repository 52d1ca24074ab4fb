//! Category browsing over `bs_product`

use std::collections::{BTreeMap, BTreeSet};

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::entities::{bs_product, prelude::*};

#[derive(Debug, FromQueryResult)]
struct CategoryPair {
    category: String,
    subcategory: String,
}

/// Every category with its distinct subcategories, both sorted
pub async fn get_all_categories(
    db: &DatabaseConnection,
) -> Result<BTreeMap<String, Vec<String>>, DbErr> {
    let pairs = category_pairs(db, None).await?;
    Ok(group_subcategories(pairs))
}

/// Subcategories of each requested category. Unknown categories map to an
/// empty list.
pub async fn get_subcategories(
    db: &DatabaseConnection,
    categories: &[String],
) -> Result<BTreeMap<String, Vec<String>>, DbErr> {
    let mut grouped: BTreeMap<String, Vec<String>> = categories
        .iter()
        .map(|category| (category.clone(), Vec::new()))
        .collect();

    if categories.is_empty() {
        return Ok(grouped);
    }

    let pairs = category_pairs(db, Some(categories)).await?;
    grouped.extend(group_subcategories(pairs));

    Ok(grouped)
}

async fn category_pairs(
    db: &DatabaseConnection,
    categories: Option<&[String]>,
) -> Result<Vec<CategoryPair>, DbErr> {
    let mut select = BsProduct::find()
        .select_only()
        .column(bs_product::Column::Category)
        .column(bs_product::Column::Subcategory)
        .distinct();

    if let Some(categories) = categories {
        select = select.filter(bs_product::Column::Category.is_in(categories.iter().cloned()));
    }

    select
        .order_by_asc(bs_product::Column::Category)
        .order_by_asc(bs_product::Column::Subcategory)
        .into_model::<CategoryPair>()
        .all(db)
        .await
}

fn group_subcategories(pairs: Vec<CategoryPair>) -> BTreeMap<String, Vec<String>> {
    let mut sets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for pair in pairs {
        sets.entry(pair.category).or_default().insert(pair.subcategory);
    }

    sets.into_iter()
        .map(|(category, subcategories)| (category, subcategories.into_iter().collect()))
        .collect()
}
