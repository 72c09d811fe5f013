use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::{
    Bilingual, CompanyInfo, ContentKind, ContentValidationError, Faq, HeroSlide, Project, Service,
    ServiceFeature, Testimonial,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, NewFaq, NewHeroSlide, NewProject, NewServiceFeature, PatchField,
};

//
// ──────────────────────────────────────────────────────────
// Commands (raw input, validated by the service)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateServiceCommand {
    pub slug: String,
    pub title: Bilingual<String>,
    pub description: Bilingual<String>,
    pub short_description: Bilingual<Option<String>>,
    pub icon_name: Option<String>,
    pub image_url: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct CreateTestimonialCommand {
    pub name: Bilingual<String>,
    pub content: Bilingual<String>,
    /// Defaults to 5.0 when omitted.
    pub rating: Option<f64>,
    pub company: Option<String>,
    pub image_url: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct UpsertCompanyInfoCommand {
    pub key: String,
    pub value: Bilingual<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PatchTestimonialCommand {
    pub name_ar: PatchField<String>,
    pub name_en: PatchField<String>,
    pub content_ar: PatchField<String>,
    pub content_en: PatchField<String>,
    pub rating: PatchField<f64>,
    pub company: PatchField<String>,
    pub image_url: PatchField<String>,
    pub order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterContentError {
    #[error("Invalid content: {0}")]
    Invalid(#[from] ContentValidationError),

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Company info key already exists")]
    KeyAlreadyExists,

    #[error("Record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentRepositoryError> for RegisterContentError {
    fn from(e: ContentRepositoryError) -> Self {
        match e {
            ContentRepositoryError::SlugAlreadyExists => RegisterContentError::SlugAlreadyExists,
            ContentRepositoryError::KeyAlreadyExists => RegisterContentError::KeyAlreadyExists,
            ContentRepositoryError::NotFound => RegisterContentError::NotFound,
            other => RegisterContentError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterContentUseCase: Send + Sync {
    async fn create_hero_slide(&self, data: NewHeroSlide)
        -> Result<HeroSlide, RegisterContentError>;

    async fn create_service(
        &self,
        command: CreateServiceCommand,
    ) -> Result<Service, RegisterContentError>;

    async fn create_project(&self, data: NewProject) -> Result<Project, RegisterContentError>;

    async fn create_testimonial(
        &self,
        command: CreateTestimonialCommand,
    ) -> Result<Testimonial, RegisterContentError>;

    async fn create_faq(&self, data: NewFaq) -> Result<Faq, RegisterContentError>;

    async fn create_service_feature(
        &self,
        data: NewServiceFeature,
    ) -> Result<ServiceFeature, RegisterContentError>;

    async fn create_company_info(
        &self,
        command: UpsertCompanyInfoCommand,
    ) -> Result<CompanyInfo, RegisterContentError>;

    async fn upsert_company_info(
        &self,
        command: UpsertCompanyInfoCommand,
    ) -> Result<CompanyInfo, RegisterContentError>;

    async fn patch_testimonial(
        &self,
        id: Uuid,
        command: PatchTestimonialCommand,
    ) -> Result<Testimonial, RegisterContentError>;

    async fn set_active(
        &self,
        kind: ContentKind,
        id: Uuid,
        active: bool,
    ) -> Result<(), RegisterContentError>;
}
