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
                    .table(Faqs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faqs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Faqs::QuestionAr).text().not_null())
                    .col(ColumnDef::new(Faqs::QuestionEn).text().not_null())
                    .col(ColumnDef::new(Faqs::AnswerAr).text().not_null())
                    .col(ColumnDef::new(Faqs::AnswerEn).text().not_null())
                    .col(
                        ColumnDef::new(Faqs::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Faqs::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Faqs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Faqs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        create_listing_index(manager, "faqs").await?;
        create_updated_at_trigger(manager, "faqs").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_listing_artifacts(manager, "faqs").await?;

        manager
            .drop_table(Table::drop().table(Faqs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Faqs {
    Table,
    Id,
    QuestionAr,
    QuestionEn,
    AnswerAr,
    AnswerEn,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
