// src/modules/site/application/domain/page.rs
//
// Localized page documents. Every string is already resolved for the
// request's locale.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::contact_links::ContactLinks;
use super::embed::EmbedState;
use super::metadata::PageMetadata;
use crate::modules::locale::application::domain::PageContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Navigation {
    pub brand: String,
    pub tagline: String,
    pub logo: String,
    pub items: Vec<Link>,
    /// Same page in the other locale.
    pub switch_language: Link,
    pub contact: ContactLinks,
}

//
// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    About,
    Services,
    Projects,
    WhyUs,
    Faq,
    Contact,
    Map,
}

impl SectionKind {
    /// Fixed top-to-bottom order of the home page.
    pub const HOME_ORDER: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Services,
        SectionKind::Projects,
        SectionKind::WhyUs,
        SectionKind::Faq,
        SectionKind::Contact,
        SectionKind::Map,
    ];

    /// In-page anchor used by navigation.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Projects => "projects",
            SectionKind::WhyUs => "why-us",
            SectionKind::Faq => "faq",
            SectionKind::Contact => "contact",
            SectionKind::Map => "map",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroSlideView {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroSection {
    pub slides: Vec<HeroSlideView>,
    pub video: EmbedState,
    pub buttons: Vec<Link>,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AboutSection {
    pub title: String,
    pub subtitle: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ServiceCard {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub link: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ServicesSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryTab {
    pub key: String,
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectCard {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
    pub category: Option<String>,
    pub category_label: Option<String>,
    pub location: Option<String>,
    pub year: Option<String>,
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectsSection {
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<CategoryTab>,
    pub items: Vec<ProjectCard>,
    /// Shown instead of the grid when there is nothing to list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_text: Option<String>,
    pub view_all: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FeatureView {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TestimonialView {
    pub name: String,
    pub content: String,
    pub rating: f64,
    pub company: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TestimonialsBlock {
    pub title: String,
    pub items: Vec<TestimonialView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WhyUsSection {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<FeatureView>,
    /// Omitted when there are no active testimonials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<TestimonialsBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FaqSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactInfo {
    pub title: String,
    pub phone_label: String,
    pub email_label: String,
    pub address: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactForm {
    pub title: String,
    /// POST target.
    pub action: String,
    pub fields: Vec<FormField>,
    pub service_placeholder: String,
    pub service_options: Vec<SelectOption>,
    pub submit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactSection {
    pub title: String,
    pub subtitle: String,
    pub info: ContactInfo,
    pub links: ContactLinks,
    pub buttons: Vec<Link>,
    pub form: ContactForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MapCard {
    pub title: String,
    pub address: String,
    pub directions: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MapSection {
    pub title: String,
    pub subtitle: String,
    pub embed: EmbedState,
    pub card: MapCard,
}

/// One block of the home page, tagged by `kind` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Hero(HeroSection),
    About(AboutSection),
    Services(ServicesSection),
    Projects(ProjectsSection),
    WhyUs(WhyUsSection),
    Faq(FaqSection),
    Contact(ContactSection),
    Map(MapSection),
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero(_) => SectionKind::Hero,
            Section::About(_) => SectionKind::About,
            Section::Services(_) => SectionKind::Services,
            Section::Projects(_) => SectionKind::Projects,
            Section::WhyUs(_) => SectionKind::WhyUs,
            Section::Faq(_) => SectionKind::Faq,
            Section::Contact(_) => SectionKind::Contact,
            Section::Map(_) => SectionKind::Map,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Footer {
    pub brand: String,
    pub description: String,
    pub quick_links_title: String,
    pub quick_links: Vec<Link>,
    pub services_title: String,
    pub services: Vec<Link>,
    pub follow_us: String,
    pub social_profiles: Vec<String>,
    pub contact: ContactLinks,
    pub copyright: String,
    pub bottom_links: Vec<Link>,
}

//
// ──────────────────────────────────────────────────────────
// Pages
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HomePage {
    pub context: PageContext,
    pub alternate_path: String,
    pub metadata: PageMetadata,
    pub navigation: Navigation,
    /// Hero, about, services, projects, why-us, FAQ, contact, map.
    #[schema(value_type = Vec<Object>)]
    pub sections: Vec<Section>,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ServiceDetail {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServicePage {
    pub context: PageContext,
    pub alternate_path: String,
    pub metadata: PageMetadata,
    pub navigation: Navigation,
    pub service: ServiceDetail,
    pub back: Link,
    pub quote: Link,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectListing {
    pub context: PageContext,
    pub alternate_path: String,
    pub metadata: PageMetadata,
    pub title: String,
    pub categories: Vec<CategoryTab>,
    pub items: Vec<ProjectCard>,
    /// Matching projects before the visible-count slice.
    pub total: usize,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_text: Option<String>,
}
