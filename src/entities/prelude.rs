//! `SeaORM` entity prelude

pub use super::bs_product::Entity as BsProduct;
pub use super::bs_product_history_entry::Entity as BsProductHistoryEntry;
pub use super::bs_product_review::Entity as BsProductReview;
pub use super::current_bs_product_top_list::Entity as CurrentBsProductTopList;
pub use super::dead_bs_product::Entity as DeadBsProduct;
pub use super::latest_bs_product_history_entry::Entity as LatestBsProductHistoryEntry;
