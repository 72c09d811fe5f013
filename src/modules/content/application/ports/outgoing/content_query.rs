// src/modules/content/application/ports/outgoing/content_query.rs

use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::content::application::domain::{
    CompanyInfo, Faq, HeroSlide, Project, Service, ServiceFeature, Testimonial,
};

/// Category view over projects. `None` category means all categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectFilter {
    pub category: Option<String>,
    #[serde(default)]
    pub featured_only: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored row could not be decoded: {0}")]
    CorruptRow(String),
}

/// Read side of the content store.
///
/// Every listing returns only `is_active` rows, ordered by `order` then `created_at`.
#[async_trait]
pub trait ContentQuery: Send + Sync {
    async fn active_hero_slides(&self) -> Result<Vec<HeroSlide>, ContentQueryError>;

    async fn active_services(&self) -> Result<Vec<Service>, ContentQueryError>;

    async fn active_service_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Service>, ContentQueryError>;

    async fn active_projects(
        &self,
        filter: &ProjectFilter,
    ) -> Result<Vec<Project>, ContentQueryError>;

    async fn active_testimonials(&self) -> Result<Vec<Testimonial>, ContentQueryError>;

    async fn active_faqs(&self) -> Result<Vec<Faq>, ContentQueryError>;

    async fn active_service_features(&self) -> Result<Vec<ServiceFeature>, ContentQueryError>;

    async fn active_company_info(&self) -> Result<Vec<CompanyInfo>, ContentQueryError>;
}
