use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Latest history entry for every product, dead or alive
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE VIEW latest_bs_product_history_entry AS
                SELECT
                    h.bs_product_article_nbr,
                    h.retrieved_timestamp,
                    h.unit_volume,
                    h.unit_price,
                    h.alcvol,
                    h.apk
                FROM bs_product_history_entry h
                JOIN (
                    SELECT bs_product_article_nbr, MAX(retrieved_timestamp) AS latest_timestamp
                    FROM bs_product_history_entry
                    GROUP BY bs_product_article_nbr
                ) latest
                    ON latest.bs_product_article_nbr = h.bs_product_article_nbr
                   AND latest.latest_timestamp = h.retrieved_timestamp
                "#,
            )
            .await?;

        // Live products only, ranked by APK. Ties fall back to article number
        // so ranks stay stable between reads.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE VIEW current_bs_product_top_list AS
                SELECT
                    l.bs_product_article_nbr,
                    p.url,
                    p.product_name,
                    p.category,
                    p.subcategory,
                    l.unit_volume,
                    l.unit_price,
                    l.alcvol,
                    l.apk,
                    l.retrieved_timestamp,
                    ROW_NUMBER() OVER (
                        ORDER BY l.apk DESC, l.bs_product_article_nbr ASC
                    ) AS current_rank
                FROM latest_bs_product_history_entry l
                JOIN bs_product p ON p.article_nbr = l.bs_product_article_nbr
                WHERE NOT EXISTS (
                    SELECT 1
                    FROM dead_bs_product d
                    WHERE d.bs_product_article_nbr = l.bs_product_article_nbr
                      AND d.marked_revived_timestamp IS NULL
                )
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS current_bs_product_top_list")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS latest_bs_product_history_entry")
            .await?;

        Ok(())
    }
}
