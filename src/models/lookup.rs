//! Batch lookup request bodies

use serde::Deserialize;

/// Body of the history, review and rank lookups
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleNbrsRequest {
    pub article_nbrs: Vec<i32>,
}

/// Body of POST /bs/subcategories
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoriesRequest {
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_nbrs_are_required_integers() {
        assert!(serde_json::from_value::<ArticleNbrsRequest>(json!({})).is_err());
        assert!(serde_json::from_value::<ArticleNbrsRequest>(json!({ "articleNbrs": ["abc"] })).is_err());
        assert!(serde_json::from_value::<ArticleNbrsRequest>(json!({ "articleNbrs": [1.5] })).is_err());

        let request: ArticleNbrsRequest =
            serde_json::from_value(json!({ "articleNbrs": [2110205, 666] })).unwrap();
        assert_eq!(request.article_nbrs, vec![2110205, 666]);
    }

    #[test]
    fn test_categories_must_be_strings() {
        assert!(serde_json::from_value::<CategoriesRequest>(json!({})).is_err());
        assert!(serde_json::from_value::<CategoriesRequest>(json!({ "categories": [1] })).is_err());
        assert!(serde_json::from_value::<CategoriesRequest>(json!({ "categories": ["Vin"] })).is_ok());
    }
}
