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
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Testimonials::NameAr).text().not_null())
                    .col(ColumnDef::new(Testimonials::NameEn).text().not_null())
                    .col(ColumnDef::new(Testimonials::ContentAr).text().not_null())
                    .col(ColumnDef::new(Testimonials::ContentEn).text().not_null())
                    .col(ColumnDef::new(Testimonials::Rating).small_integer().not_null())
                    .col(ColumnDef::new(Testimonials::Company).text())
                    .col(ColumnDef::new(Testimonials::ImageUrl).text())
                    .col(
                        ColumnDef::new(Testimonials::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Testimonials::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Testimonials::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Rating is stored in tenths of a star
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE testimonials
                ADD CONSTRAINT chk_testimonials_rating
                CHECK (rating BETWEEN 0 AND 50);
                "#,
            )
            .await?;

        create_listing_index(manager, "testimonials").await?;
        create_updated_at_trigger(manager, "testimonials").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_listing_artifacts(manager, "testimonials").await?;

        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    NameAr,
    NameEn,
    ContentAr,
    ContentEn,
    Rating,
    Company,
    ImageUrl,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
