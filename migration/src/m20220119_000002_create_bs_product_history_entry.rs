use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BsProductHistoryEntry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BsProductHistoryEntry::BsProductArticleNbr)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BsProductHistoryEntry::RetrievedTimestamp)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BsProductHistoryEntry::UnitVolume)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BsProductHistoryEntry::UnitPrice)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BsProductHistoryEntry::Alcvol)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BsProductHistoryEntry::Apk)
                            .double()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(BsProductHistoryEntry::BsProductArticleNbr)
                            .col(BsProductHistoryEntry::RetrievedTimestamp),
                    )
                    // Inline so SQLite gets the constraint too
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bs_product_history_entry_article_nbr")
                            .from(
                                BsProductHistoryEntry::Table,
                                BsProductHistoryEntry::BsProductArticleNbr,
                            )
                            .to(BsProduct::Table, BsProduct::ArticleNbr)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Latest-entry lookups group by product and take the max timestamp
        manager
            .create_index(
                Index::create()
                    .name("idx_bs_product_history_entry_retrieved")
                    .table(BsProductHistoryEntry::Table)
                    .col(BsProductHistoryEntry::RetrievedTimestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BsProductHistoryEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BsProductHistoryEntry {
    Table,
    BsProductArticleNbr,
    RetrievedTimestamp,
    UnitVolume,
    UnitPrice,
    Alcvol,
    Apk,
}

#[derive(DeriveIden)]
enum BsProduct {
    Table,
    ArticleNbr,
}
