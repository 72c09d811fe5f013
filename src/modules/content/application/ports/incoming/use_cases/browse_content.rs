use async_trait::async_trait;

use crate::modules::content::application::domain::{
    CompanyInfo, Faq, HeroSlide, Project, Service, ServiceFeature, Testimonial,
};
use crate::modules::content::application::ports::outgoing::{ContentQueryError, ProjectFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseContentError {
    #[error("Content query failed: {0}")]
    QueryFailed(String),
}

impl From<ContentQueryError> for BrowseContentError {
    fn from(e: ContentQueryError) -> Self {
        BrowseContentError::QueryFailed(e.to_string())
    }
}

/// Public listings: active, fully translated records in display order.
#[async_trait]
pub trait BrowseContentUseCase: Send + Sync {
    async fn hero_slides(&self) -> Result<Vec<HeroSlide>, BrowseContentError>;

    async fn services(&self) -> Result<Vec<Service>, BrowseContentError>;

    /// `None` for unknown, inactive or half-translated services.
    async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>, BrowseContentError>;

    async fn projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, BrowseContentError>;

    async fn testimonials(&self) -> Result<Vec<Testimonial>, BrowseContentError>;

    async fn faqs(&self) -> Result<Vec<Faq>, BrowseContentError>;

    async fn service_features(&self) -> Result<Vec<ServiceFeature>, BrowseContentError>;

    async fn company_info(&self) -> Result<Vec<CompanyInfo>, BrowseContentError>;
}
