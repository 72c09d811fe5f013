// src/modules/content/application/ports/outgoing/content_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::content::application::domain::{
    Bilingual, CompanyInfo, CompanyInfoKey, ContentKind, Faq, HeroSlide, Project, Rating, Service,
    ServiceFeature, Slug, Testimonial,
};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (nullable fields only)
// - Value(v): replace with v
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs (already validated)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct NewHeroSlide {
    pub title: Bilingual<String>,
    pub subtitle: Bilingual<Option<String>>,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub cta_text: Bilingual<Option<String>>,
    pub cta_link: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub slug: Slug,
    pub title: Bilingual<String>,
    pub description: Bilingual<String>,
    pub short_description: Bilingual<Option<String>>,
    pub icon_name: Option<String>,
    pub image_url: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: Bilingual<String>,
    pub description: Bilingual<Option<String>>,
    pub image_urls: Vec<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub year: Option<String>,
    pub is_featured: bool,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTestimonial {
    pub name: Bilingual<String>,
    pub content: Bilingual<String>,
    pub rating: Rating,
    pub company: Option<String>,
    pub image_url: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFaq {
    pub question: Bilingual<String>,
    pub answer: Bilingual<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceFeature {
    pub title: Bilingual<String>,
    pub description: Bilingual<Option<String>>,
    pub icon_name: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCompanyInfo {
    pub key: CompanyInfoKey,
    pub value: Bilingual<String>,
}

/// Partial testimonial update. Required columns never receive `Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialPatch {
    pub name_ar: PatchField<String>,
    pub name_en: PatchField<String>,
    pub content_ar: PatchField<String>,
    pub content_en: PatchField<String>,
    pub rating: PatchField<Rating>,
    pub company: PatchField<String>,
    pub image_url: PatchField<String>,
    pub order: PatchField<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Company info key already exists")]
    KeyAlreadyExists,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of the content store. Every call is a single-row atomic write.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn create_hero_slide(
        &self,
        data: NewHeroSlide,
    ) -> Result<HeroSlide, ContentRepositoryError>;

    async fn create_service(&self, data: NewService) -> Result<Service, ContentRepositoryError>;

    async fn create_project(&self, data: NewProject) -> Result<Project, ContentRepositoryError>;

    async fn create_testimonial(
        &self,
        data: NewTestimonial,
    ) -> Result<Testimonial, ContentRepositoryError>;

    async fn create_faq(&self, data: NewFaq) -> Result<Faq, ContentRepositoryError>;

    async fn create_service_feature(
        &self,
        data: NewServiceFeature,
    ) -> Result<ServiceFeature, ContentRepositoryError>;

    /// Fails with `KeyAlreadyExists` when the key is taken.
    async fn create_company_info(
        &self,
        data: NewCompanyInfo,
    ) -> Result<CompanyInfo, ContentRepositoryError>;

    /// Inserts the key or replaces its value.
    async fn upsert_company_info(
        &self,
        data: NewCompanyInfo,
    ) -> Result<CompanyInfo, ContentRepositoryError>;

    async fn patch_testimonial(
        &self,
        id: Uuid,
        patch: TestimonialPatch,
    ) -> Result<Testimonial, ContentRepositoryError>;

    /// Soft (de)activation. Rows are never hard-deleted.
    async fn set_active(
        &self,
        kind: ContentKind,
        id: Uuid,
        active: bool,
    ) -> Result<(), ContentRepositoryError>;
}
