// src/modules/content/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bilingual::{Bilingual, BilingualText};
use super::listing::Listed;
use super::values::{CompanyInfoKey, Rating, Slug};

/// Columns every content table carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMeta {
    pub id: Uuid,
    /// Display position, ascending. Gaps allowed.
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tables that support soft (de)activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    HeroSlide,
    Service,
    Project,
    Testimonial,
    Faq,
    ServiceFeature,
    CompanyInfo,
}

impl ContentKind {
    pub const fn table_name(self) -> &'static str {
        match self {
            ContentKind::HeroSlide => "hero_slides",
            ContentKind::Service => "services",
            ContentKind::Project => "projects",
            ContentKind::Testimonial => "testimonials",
            ContentKind::Faq => "faqs",
            ContentKind::ServiceFeature => "service_features",
            ContentKind::CompanyInfo => "company_info",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub meta: ContentMeta,
    pub title: Bilingual<String>,
    pub subtitle: Bilingual<Option<String>>,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub cta_text: Bilingual<Option<String>>,
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub meta: ContentMeta,
    pub slug: Slug,
    pub title: Bilingual<String>,
    pub description: Bilingual<String>,
    pub short_description: Bilingual<Option<String>>,
    pub icon_name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub meta: ContentMeta,
    pub title: Bilingual<String>,
    pub description: Bilingual<Option<String>>,
    /// Display order of the gallery.
    pub image_urls: Vec<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub year: Option<String>,
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub meta: ContentMeta,
    pub name: Bilingual<String>,
    pub content: Bilingual<String>,
    pub rating: Rating,
    pub company: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub meta: ContentMeta,
    pub question: Bilingual<String>,
    pub answer: Bilingual<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceFeature {
    pub meta: ContentMeta,
    pub title: Bilingual<String>,
    pub description: Bilingual<Option<String>>,
    pub icon_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyInfo {
    pub meta: ContentMeta,
    pub key: CompanyInfoKey,
    pub value: Bilingual<String>,
}

//
// ──────────────────────────────────────────────────────────
// Publishability
// ──────────────────────────────────────────────────────────
//

impl Listed for HeroSlide {
    fn meta(&self) -> &ContentMeta {
        &self.meta
    }

    fn is_publishable(&self) -> bool {
        self.title.is_complete() && self.subtitle.is_complete() && self.cta_text.is_complete()
    }
}

impl Listed for Service {
    fn meta(&self) -> &ContentMeta {
        &self.meta
    }

    fn is_publishable(&self) -> bool {
        self.title.is_complete()
            && self.description.is_complete()
            && self.short_description.is_complete()
    }
}

impl Listed for Project {
    fn meta(&self) -> &ContentMeta {
        &self.meta
    }

    fn is_publishable(&self) -> bool {
        self.title.is_complete() && self.description.is_complete()
    }
}

impl Listed for Testimonial {
    fn meta(&self) -> &ContentMeta {
        &self.meta
    }

    fn is_publishable(&self) -> bool {
        self.name.is_complete() && self.content.is_complete()
    }
}

impl Listed for Faq {
    fn meta(&self) -> &ContentMeta {
        &self.meta
    }

    fn is_publishable(&self) -> bool {
        self.question.is_complete() && self.answer.is_complete()
    }
}

impl Listed for ServiceFeature {
    fn meta(&self) -> &ContentMeta {
        &self.meta
    }

    fn is_publishable(&self) -> bool {
        self.title.is_complete() && self.description.is_complete()
    }
}

impl Listed for CompanyInfo {
    fn meta(&self) -> &ContentMeta {
        &self.meta
    }

    fn is_publishable(&self) -> bool {
        self.value.is_complete()
    }
}
