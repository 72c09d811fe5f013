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
                    .table(ServiceFeatures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceFeatures::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ServiceFeatures::TitleAr).text().not_null())
                    .col(ColumnDef::new(ServiceFeatures::TitleEn).text().not_null())
                    .col(ColumnDef::new(ServiceFeatures::DescriptionAr).text())
                    .col(ColumnDef::new(ServiceFeatures::DescriptionEn).text())
                    .col(ColumnDef::new(ServiceFeatures::IconName).text())
                    .col(
                        ColumnDef::new(ServiceFeatures::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ServiceFeatures::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ServiceFeatures::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ServiceFeatures::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        create_listing_index(manager, "service_features").await?;
        create_updated_at_trigger(manager, "service_features").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_listing_artifacts(manager, "service_features").await?;

        manager
            .drop_table(Table::drop().table(ServiceFeatures::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceFeatures {
    Table,
    Id,
    TitleAr,
    TitleEn,
    DescriptionAr,
    DescriptionEn,
    IconName,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
