//! Statements every content table shares.

use sea_orm_migration::prelude::*;

/// Public listings filter on `is_active` and sort by `"order"`, then `created_at`.
pub async fn create_listing_index(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            r#"CREATE INDEX IF NOT EXISTS idx_{table}_listing ON {table} (is_active, "order", created_at);"#
        ))
        .await?;
    Ok(())
}

pub async fn create_updated_at_trigger(
    manager: &SchemaManager<'_>,
    table: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            r#"
            CREATE TRIGGER update_{table}_updated_at
            BEFORE UPDATE ON {table}
            FOR EACH ROW
            EXECUTE FUNCTION update_updated_at_column();
            "#
        ))
        .await?;
    Ok(())
}

pub async fn drop_listing_artifacts(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            r#"
            DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table};
            DROP INDEX IF EXISTS idx_{table}_listing;
            "#
        ))
        .await?;
    Ok(())
}
