use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Static product identity, one row per article number
        manager
            .create_table(
                Table::create()
                    .table(BsProduct::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BsProduct::ArticleNbr)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BsProduct::Url).text().not_null())
                    .col(ColumnDef::new(BsProduct::ProductName).text().not_null())
                    .col(ColumnDef::new(BsProduct::Category).text().not_null())
                    .col(ColumnDef::new(BsProduct::Subcategory).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bs_product_category_subcategory")
                    .table(BsProduct::Table)
                    .col(BsProduct::Category)
                    .col(BsProduct::Subcategory)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BsProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BsProduct {
    Table,
    ArticleNbr,
    Url,
    ProductName,
    Category,
    Subcategory,
}
