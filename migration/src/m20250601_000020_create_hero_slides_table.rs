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
                    .table(HeroSlides::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeroSlides::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(HeroSlides::TitleAr).text().not_null())
                    .col(ColumnDef::new(HeroSlides::TitleEn).text().not_null())
                    .col(ColumnDef::new(HeroSlides::SubtitleAr).text())
                    .col(ColumnDef::new(HeroSlides::SubtitleEn).text())
                    .col(ColumnDef::new(HeroSlides::YoutubeUrl).text())
                    .col(ColumnDef::new(HeroSlides::ImageUrl).text())
                    .col(ColumnDef::new(HeroSlides::CtaTextAr).text())
                    .col(ColumnDef::new(HeroSlides::CtaTextEn).text())
                    .col(ColumnDef::new(HeroSlides::CtaLink).text())
                    .col(
                        ColumnDef::new(HeroSlides::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(HeroSlides::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(HeroSlides::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(HeroSlides::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        create_listing_index(manager, "hero_slides").await?;
        create_updated_at_trigger(manager, "hero_slides").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_listing_artifacts(manager, "hero_slides").await?;

        manager
            .drop_table(Table::drop().table(HeroSlides::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HeroSlides {
    Table,
    Id,
    TitleAr,
    TitleEn,
    SubtitleAr,
    SubtitleEn,
    YoutubeUrl,
    ImageUrl,
    CtaTextAr,
    CtaTextEn,
    CtaLink,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
