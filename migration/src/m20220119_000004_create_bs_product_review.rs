use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // At most one review per product
        manager
            .create_table(
                Table::create()
                    .table(BsProductReview::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BsProductReview::BsProductArticleNbr)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BsProductReview::ReviewScore)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BsProductReview::ReviewText).text().not_null())
                    .col(
                        ColumnDef::new(BsProductReview::ReviewerName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BsProductReview::ReviewCreatedTimestamp)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bs_product_review_article_nbr")
                            .from(BsProductReview::Table, BsProductReview::BsProductArticleNbr)
                            .to(BsProduct::Table, BsProduct::ArticleNbr)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BsProductReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BsProductReview {
    Table,
    BsProductArticleNbr,
    ReviewScore,
    ReviewText,
    ReviewerName,
    ReviewCreatedTimestamp,
}

#[derive(DeriveIden)]
enum BsProduct {
    Table,
    ArticleNbr,
}
