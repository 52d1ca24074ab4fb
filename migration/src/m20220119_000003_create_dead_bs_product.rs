use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

const TRIGGER_NAME: &str = "dead_bs_product_single_open_interval";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per dead interval; an open interval has no revived timestamp
        manager
            .create_table(
                Table::create()
                    .table(DeadBsProduct::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeadBsProduct::BsProductArticleNbr)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeadBsProduct::MarkedDeadTimestamp)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeadBsProduct::MarkedRevivedTimestamp)
                            .big_integer()
                            .null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(DeadBsProduct::BsProductArticleNbr)
                            .col(DeadBsProduct::MarkedDeadTimestamp),
                    )
                    .check(
                        Expr::col(DeadBsProduct::MarkedRevivedTimestamp)
                            .is_null()
                            .or(Expr::col(DeadBsProduct::MarkedRevivedTimestamp)
                                .gte(Expr::col(DeadBsProduct::MarkedDeadTimestamp))),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dead_bs_product_article_nbr")
                            .from(DeadBsProduct::Table, DeadBsProduct::BsProductArticleNbr)
                            .to(BsProduct::Table, BsProduct::ArticleNbr)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();

        // At most one open interval per product
        match manager.get_database_backend() {
            DatabaseBackend::Postgres => {
                db.execute_unprepared(&format!(
                    r#"
                    CREATE OR REPLACE FUNCTION {TRIGGER_NAME}() RETURNS trigger AS $$
                    DECLARE
                        conflict boolean;
                    BEGIN
                        IF NEW.marked_revived_timestamp IS NULL THEN
                            IF TG_OP = 'UPDATE' THEN
                                SELECT EXISTS (
                                    SELECT 1 FROM dead_bs_product
                                    WHERE bs_product_article_nbr = NEW.bs_product_article_nbr
                                      AND marked_revived_timestamp IS NULL
                                      AND NOT (bs_product_article_nbr = OLD.bs_product_article_nbr
                                               AND marked_dead_timestamp = OLD.marked_dead_timestamp)
                                ) INTO conflict;
                            ELSE
                                SELECT EXISTS (
                                    SELECT 1 FROM dead_bs_product
                                    WHERE bs_product_article_nbr = NEW.bs_product_article_nbr
                                      AND marked_revived_timestamp IS NULL
                                      AND marked_dead_timestamp <> NEW.marked_dead_timestamp
                                ) INTO conflict;
                            END IF;

                            IF conflict THEN
                                RAISE EXCEPTION 'product % already has an open dead marker',
                                    NEW.bs_product_article_nbr;
                            END IF;
                        END IF;
                        RETURN NEW;
                    END;
                    $$ LANGUAGE plpgsql;
                    "#
                ))
                .await?;

                db.execute_unprepared(&format!(
                    r#"
                    CREATE TRIGGER {TRIGGER_NAME}
                    BEFORE INSERT OR UPDATE ON dead_bs_product
                    FOR EACH ROW EXECUTE FUNCTION {TRIGGER_NAME}();
                    "#
                ))
                .await?;
            }
            DatabaseBackend::Sqlite => {
                // The row being updated is excluded by its old key
                let triggers = [
                    ("insert", "INSERT", "marked_dead_timestamp <> NEW.marked_dead_timestamp"),
                    (
                        "update",
                        "UPDATE",
                        "NOT (bs_product_article_nbr = OLD.bs_product_article_nbr \
                         AND marked_dead_timestamp = OLD.marked_dead_timestamp)",
                    ),
                ];
                for (suffix, event, exclude_self) in triggers {
                    db.execute_unprepared(&format!(
                        r#"
                        CREATE TRIGGER {TRIGGER_NAME}_{suffix}
                        BEFORE {event} ON dead_bs_product
                        WHEN NEW.marked_revived_timestamp IS NULL AND EXISTS (
                            SELECT 1 FROM dead_bs_product
                            WHERE bs_product_article_nbr = NEW.bs_product_article_nbr
                              AND marked_revived_timestamp IS NULL
                              AND {exclude_self}
                        )
                        BEGIN
                            SELECT RAISE(ABORT, 'product already has an open dead marker');
                        END;
                        "#
                    ))
                    .await?;
                }
            }
            backend => {
                return Err(DbErr::Migration(format!(
                    "dead_bs_product trigger is not implemented for {backend:?}"
                )));
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        match manager.get_database_backend() {
            DatabaseBackend::Postgres => {
                db.execute_unprepared(&format!(
                    "DROP TRIGGER IF EXISTS {TRIGGER_NAME} ON dead_bs_product"
                ))
                .await?;
                db.execute_unprepared(&format!("DROP FUNCTION IF EXISTS {TRIGGER_NAME}()"))
                    .await?;
            }
            DatabaseBackend::Sqlite => {
                db.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {TRIGGER_NAME}_insert"))
                    .await?;
                db.execute_unprepared(&format!("DROP TRIGGER IF EXISTS {TRIGGER_NAME}_update"))
                    .await?;
            }
            _ => {}
        }

        manager
            .drop_table(Table::drop().table(DeadBsProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DeadBsProduct {
    Table,
    BsProductArticleNbr,
    MarkedDeadTimestamp,
    MarkedRevivedTimestamp,
}

#[derive(DeriveIden)]
enum BsProduct {
    Table,
    ArticleNbr,
}
