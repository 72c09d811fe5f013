// src/modules/content/adapter/outgoing/content_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::warn;

use super::row_mapping;
use super::sea_orm_entity::{
    company_info, faqs, hero_slides, projects, service_features, services, testimonials,
};
use crate::modules::content::application::domain::{
    CompanyInfo, Faq, HeroSlide, Project, Service, ServiceFeature, Testimonial,
};
use crate::modules::content::application::ports::outgoing::{
    ContentQuery, ContentQueryError, ProjectFilter,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentQuery for ContentQueryPostgres {
    async fn active_hero_slides(&self) -> Result<Vec<HeroSlide>, ContentQueryError> {
        use hero_slides::{Column, Entity};

        let rows = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(row_mapping::hero_slide).collect())
    }

    async fn active_services(&self) -> Result<Vec<Service>, ContentQueryError> {
        use services::{Column, Entity};

        let rows = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(decode_rows("services", rows, row_mapping::service))
    }

    async fn active_service_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Service>, ContentQueryError> {
        use services::{Column, Entity};

        // Slugs are case-sensitive; no normalization beyond trimming.
        let row = Entity::find()
            .filter(Column::Slug.eq(slug.trim()))
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(|m| row_mapping::service(m).map_err(ContentQueryError::CorruptRow))
            .transpose()
    }

    async fn active_projects(
        &self,
        filter: &ProjectFilter,
    ) -> Result<Vec<Project>, ContentQueryError> {
        use projects::{Column, Entity};

        let mut query = Entity::find().filter(Column::IsActive.eq(true));

        if let Some(category) = filter.category.as_deref() {
            query = query.filter(Column::Category.eq(category));
        }

        if filter.featured_only {
            query = query.filter(Column::IsFeatured.eq(true));
        }

        let rows = query
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(decode_rows("projects", rows, row_mapping::project))
    }

    async fn active_testimonials(&self) -> Result<Vec<Testimonial>, ContentQueryError> {
        use testimonials::{Column, Entity};

        let rows = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(decode_rows("testimonials", rows, row_mapping::testimonial))
    }

    async fn active_faqs(&self) -> Result<Vec<Faq>, ContentQueryError> {
        use faqs::{Column, Entity};

        let rows = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(row_mapping::faq).collect())
    }

    async fn active_service_features(&self) -> Result<Vec<ServiceFeature>, ContentQueryError> {
        use service_features::{Column, Entity};

        let rows = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(row_mapping::service_feature).collect())
    }

    async fn active_company_info(&self) -> Result<Vec<CompanyInfo>, ContentQueryError> {
        use company_info::{Column, Entity};

        let rows = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(decode_rows("company info", rows, row_mapping::company_info))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ContentQueryError {
    ContentQueryError::DatabaseError(e.to_string())
}

/// Undecodable rows are logged and left out; the rest of the listing still renders.
fn decode_rows<M, T>(
    listing: &str,
    rows: Vec<M>,
    decode: impl Fn(M) -> Result<T, String>,
) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match decode(row) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping corrupt row in {}: {}", listing, e);
                None
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
