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
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::TitleAr).text().not_null())
                    .col(ColumnDef::new(Projects::TitleEn).text().not_null())
                    .col(ColumnDef::new(Projects::DescriptionAr).text())
                    .col(ColumnDef::new(Projects::DescriptionEn).text())
                    .col(
                        ColumnDef::new(Projects::ImageUrls)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Projects::Category).text())
                    .col(ColumnDef::new(Projects::Location).text())
                    .col(ColumnDef::new(Projects::Year).text())
                    .col(
                        ColumnDef::new(Projects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Projects::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Category tabs on the project listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_category
                ON projects (category)
                WHERE is_active = true;
                "#,
            )
            .await?;

        create_listing_index(manager, "projects").await?;
        create_updated_at_trigger(manager, "projects").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_listing_artifacts(manager, "projects").await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_projects_category;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    TitleAr,
    TitleEn,
    DescriptionAr,
    DescriptionEn,
    ImageUrls,
    Category,
    Location,
    Year,
    IsFeatured,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
