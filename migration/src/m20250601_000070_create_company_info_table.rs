use sea_orm_migration::prelude::*;

use crate::shared::{create_listing_index, create_updated_at_trigger, drop_listing_artifacts};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyInfo::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CompanyInfo::Key).string_len(64).not_null())
                    .col(ColumnDef::new(CompanyInfo::ValueAr).text().not_null())
                    .col(ColumnDef::new(CompanyInfo::ValueEn).text().not_null())
                    .col(
                        ColumnDef::new(CompanyInfo::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CompanyInfo::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(CompanyInfo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CompanyInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per contact fact (`phone`, `whatsapp`, `email`, `address`)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_company_info_key_unique
                ON company_info (key);
                "#,
            )
            .await?;

        create_listing_index(manager, "company_info").await?;
        create_updated_at_trigger(manager, "company_info").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_listing_artifacts(manager, "company_info").await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_company_info_key_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CompanyInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyInfo {
    Table,
    Id,
    Key,
    ValueAr,
    ValueEn,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
