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
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Services::Slug).string_len(150).not_null())
                    .col(ColumnDef::new(Services::TitleAr).text().not_null())
                    .col(ColumnDef::new(Services::TitleEn).text().not_null())
                    .col(ColumnDef::new(Services::DescriptionAr).text().not_null())
                    .col(ColumnDef::new(Services::DescriptionEn).text().not_null())
                    .col(ColumnDef::new(Services::ShortDescriptionAr).text())
                    .col(ColumnDef::new(Services::ShortDescriptionEn).text())
                    .col(ColumnDef::new(Services::IconName).text())
                    .col(ColumnDef::new(Services::ImageUrl).text())
                    .col(
                        ColumnDef::new(Services::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Services::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Services::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Slugs are case-sensitive: `carShades` and `carshades` are different services
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_services_slug_unique
                ON services (slug);
                "#,
            )
            .await?;

        create_listing_index(manager, "services").await?;
        create_updated_at_trigger(manager, "services").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_listing_artifacts(manager, "services").await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_services_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Slug,
    TitleAr,
    TitleEn,
    DescriptionAr,
    DescriptionEn,
    ShortDescriptionAr,
    ShortDescriptionEn,
    IconName,
    ImageUrl,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
