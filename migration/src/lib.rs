pub use sea_orm_migration::prelude::*;

mod m20220119_000001_create_bs_product;
mod m20220119_000002_create_bs_product_history_entry;
mod m20220119_000003_create_dead_bs_product;
mod m20220119_000004_create_bs_product_review;
mod m20220124_000001_create_top_list_views;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220119_000001_create_bs_product::Migration),
            Box::new(m20220119_000002_create_bs_product_history_entry::Migration),
            Box::new(m20220119_000003_create_dead_bs_product::Migration),
            Box::new(m20220119_000004_create_bs_product_review::Migration),
            Box::new(m20220124_000001_create_top_list_views::Migration),
        ]
    }
}
