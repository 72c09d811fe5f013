// src/modules/site/application/service/page_composer.rs

use chrono::{Datelike, Utc};
use std::sync::Arc;
use tracing::warn;

use super::localized_content::LocalizedContent;
use crate::modules::catalog::application::defaults::{DEFAULT_SERVICES, PROJECT_CATEGORIES};
use crate::modules::catalog::application::ports::outgoing::{CatalogError, MessageCatalog};
use crate::modules::content::application::domain::{Project, Service};
use crate::modules::content::application::ports::incoming::use_cases::{
    BrowseContentError, BrowseContentUseCase,
};
use crate::modules::locale::application::domain::{Locale, PageContext};
use crate::modules::site::application::domain::{
    page_metadata, BusinessProfile, CategoryTab, ContactLinks, Footer, Link, Navigation,
    PageHead, PageMetadata, ProjectCard, SectionKind, ServiceCard,
};

/// Builds localized page documents from the content store and the message catalog.
///
/// One composer serves every locale; the locale arrives with each call.
pub struct PageComposer {
    pub(super) browse: Arc<dyn BrowseContentUseCase + Send + Sync>,
    catalog: Arc<dyn MessageCatalog + Send + Sync>,
    pub(super) profile: BusinessProfile,
    pub(super) visible_projects: usize,
}

impl PageComposer {
    pub fn new(
        browse: Arc<dyn BrowseContentUseCase + Send + Sync>,
        catalog: Arc<dyn MessageCatalog + Send + Sync>,
        profile: BusinessProfile,
        visible_projects: usize,
    ) -> Self {
        Self {
            browse,
            catalog,
            profile,
            visible_projects,
        }
    }

    pub(super) fn localized(&self, locale: Locale) -> LocalizedContent<'_> {
        LocalizedContent::new(locale, self.catalog.as_ref())
    }

    /// Built from the static profile only; `company_info` rows never reach metadata.
    pub(super) fn metadata(&self, ctx: &PageContext, head: PageHead<'_>) -> PageMetadata {
        page_metadata(ctx, &self.profile, head)
    }

    pub(super) fn contact_links(
        &self,
        l: &LocalizedContent<'_>,
        profile: &BusinessProfile,
    ) -> Result<ContactLinks, CatalogError> {
        Ok(ContactLinks::build(
            profile,
            &l.t("ContactSection.whatsappMessage")?,
        ))
    }

    /// Header links point at home page anchors so they work from every page.
    pub(super) fn navigation(
        &self,
        ctx: &PageContext,
        l: &LocalizedContent<'_>,
        alternate_path: &str,
        contact: &ContactLinks,
    ) -> Result<Navigation, CatalogError> {
        Ok(Navigation {
            brand: l.t("HomePage.title")?,
            tagline: l.t("HomePage.tagline")?,
            logo: self.profile.logo_path.clone(),
            items: self.site_links(ctx, l)?,
            switch_language: Link::new(l.t("navItems.switchLanguage")?, alternate_path),
            contact: contact.clone(),
        })
    }

    fn site_links(
        &self,
        ctx: &PageContext,
        l: &LocalizedContent<'_>,
    ) -> Result<Vec<Link>, CatalogError> {
        let anchor = |kind: SectionKind| format!("{}#{}", ctx.path(""), kind.anchor());

        Ok(vec![
            Link::new(l.t("navItems.home")?, ctx.path("")),
            Link::new(l.t("navItems.about")?, anchor(SectionKind::About)),
            Link::new(l.t("navItems.services")?, anchor(SectionKind::Services)),
            Link::new(l.t("navItems.projects")?, ctx.path("projects")),
            Link::new(l.t("navItems.contact")?, anchor(SectionKind::Contact)),
        ])
    }

    pub(super) fn footer(
        &self,
        ctx: &PageContext,
        l: &LocalizedContent<'_>,
        profile: &BusinessProfile,
        services: &[ServiceCard],
        contact: &ContactLinks,
    ) -> Result<Footer, CatalogError> {
        let year = Utc::now().year().to_string();

        Ok(Footer {
            brand: l.t("HomePage.title")?,
            description: l.t("Footer.description")?,
            quick_links_title: l.t("Footer.quickLinks")?,
            quick_links: self.site_links(ctx, l)?,
            services_title: l.t("Footer.services")?,
            services: services
                .iter()
                .map(|s| Link::new(s.title.clone(), s.link.href.clone()))
                .collect(),
            follow_us: l.t("Footer.followUs")?,
            social_profiles: profile.social_profiles.clone(),
            contact: contact.clone(),
            copyright: l.t_with("Footer.copyright", &[("year", &year)])?,
            bottom_links: vec![
                Link::new(l.t("Footer.bottomLinks.privacy")?, "#"),
                Link::new(l.t("Footer.bottomLinks.terms")?, "#"),
            ],
        })
    }

    /// Database services, or the catalog's default four when none are publishable.
    pub(super) fn service_cards(
        &self,
        ctx: &PageContext,
        l: &LocalizedContent<'_>,
        services: Vec<Service>,
    ) -> Result<Vec<ServiceCard>, CatalogError> {
        let learn_more = l.t("ServicesSection.learnMore")?;
        let link = |slug: &str| Link::new(learn_more.clone(), ctx.path(&format!("services/{slug}")));

        if services.is_empty() {
            return DEFAULT_SERVICES
                .iter()
                .map(|(key, icon)| {
                    let base = format!("ServicesSection.services.{key}");
                    Ok(ServiceCard {
                        slug: key.to_string(),
                        title: l.t(&format!("{base}.title"))?,
                        description: l.t(&format!("{base}.description"))?,
                        icon: Some(icon.to_string()),
                        image_url: None,
                        link: link(*key),
                    })
                })
                .collect();
        }

        Ok(services
            .into_iter()
            .map(|s| ServiceCard {
                title: l.text(&s.title),
                description: l
                    .opt_text(&s.short_description)
                    .unwrap_or_else(|| l.text(&s.description)),
                icon: s.icon_name,
                image_url: s.image_url,
                link: link(s.slug.as_str()),
                slug: s.slug.into_inner(),
            })
            .collect())
    }

    /// `all` first; the active tab follows the requested category.
    pub(super) fn category_tabs(
        &self,
        ctx: &PageContext,
        l: &LocalizedContent<'_>,
        active: Option<&str>,
    ) -> Result<Vec<CategoryTab>, CatalogError> {
        let active = active.unwrap_or("all");

        PROJECT_CATEGORIES
            .iter()
            .map(|key| {
                let href = if *key == "all" {
                    ctx.path("projects")
                } else {
                    format!("{}?category={key}", ctx.path("projects"))
                };
                Ok(CategoryTab {
                    key: key.to_string(),
                    label: l.t(&format!("ProjectsSection.categories.{key}"))?,
                    href,
                    active: *key == active,
                })
            })
            .collect()
    }

    pub(super) fn project_card(
        &self,
        l: &LocalizedContent<'_>,
        project: Project,
    ) -> Result<ProjectCard, CatalogError> {
        let category_label = match project.category.as_deref() {
            Some(c) if c != "all" && PROJECT_CATEGORIES.contains(&c) => {
                Some(l.t(&format!("ProjectsSection.categories.{c}"))?)
            }
            _ => None,
        };

        Ok(ProjectCard {
            id: project.meta.id,
            title: l.text(&project.title),
            description: l.opt_text(&project.description),
            image_urls: project.image_urls,
            category: project.category,
            category_label,
            location: project.location,
            year: project.year,
            is_featured: project.is_featured,
        })
    }
}

/// A failed section query renders as an empty section, never a failed page.
pub(super) fn or_empty<T>(section: &str, result: Result<Vec<T>, BrowseContentError>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Rendering {} without database content: {}", section, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::adapter::outgoing::JsonMessageCatalog;
    use crate::modules::content::application::service::BrowseContentService;
    use crate::tests::support::content_fixtures::{project, service, InMemoryContentQuery};

    fn composer() -> PageComposer {
        PageComposer::new(
            Arc::new(BrowseContentService::new(InMemoryContentQuery::default())),
            Arc::new(JsonMessageCatalog::embedded().unwrap()),
            BusinessProfile::default(),
            6,
        )
    }

    #[test]
    fn service_cards_fall_back_to_catalog_defaults() {
        let composer = composer();
        let ctx = PageContext::new(Locale::En);
        let l = composer.localized(ctx.locale);

        let cards = composer.service_cards(&ctx, &l, Vec::new()).unwrap();
        let slugs: Vec<&str> = cards.iter().map(|c| c.slug.as_str()).collect();

        assert_eq!(slugs, vec!["carShades", "screens", "pergolas", "hangars"]);
        assert_eq!(cards[0].title, "Car Shades");
        assert_eq!(cards[0].link.href, "/en/services/carShades");
        assert_eq!(cards[0].link.label, "Learn more");
    }

    #[test]
    fn service_cards_use_database_rows_when_present() {
        let composer = composer();
        let ctx = PageContext::new(Locale::Ar);
        let l = composer.localized(ctx.locale);

        let cards = composer
            .service_cards(&ctx, &l, vec![service("tents", 1, true)])
            .unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "خدمة tents");
        assert_eq!(cards[0].description, "وصف tents");
        assert_eq!(cards[0].link.href, "/ar/services/tents");
    }

    #[test]
    fn category_tabs_mark_requested_category() {
        let composer = composer();
        let ctx = PageContext::new(Locale::En);
        let l = composer.localized(ctx.locale);

        let tabs = composer.category_tabs(&ctx, &l, Some("screens")).unwrap();
        assert_eq!(tabs[0].key, "all");
        assert_eq!(tabs[0].href, "/en/projects");
        assert!(!tabs[0].active);

        let screens = tabs.iter().find(|t| t.key == "screens").unwrap();
        assert!(screens.active);
        assert_eq!(screens.href, "/en/projects?category=screens");
        assert_eq!(screens.label, "Screens");

        let tabs = composer.category_tabs(&ctx, &l, None).unwrap();
        assert!(tabs[0].active);
    }

    #[test]
    fn project_card_labels_known_categories_only() {
        let composer = composer();
        let l = composer.localized(Locale::Ar);

        let known = composer
            .project_card(&l, project("villa", Some("pergolas"), false, 1, true))
            .unwrap();
        assert_eq!(known.title, "مشروع villa");
        assert_eq!(known.category_label.as_deref(), Some("البرجولات"));

        let custom = composer
            .project_card(&l, project("warehouse", Some("tents"), false, 1, true))
            .unwrap();
        assert_eq!(custom.category.as_deref(), Some("tents"));
        assert_eq!(custom.category_label, None);
    }

    #[test]
    fn footer_interpolates_current_year() {
        let composer = composer();
        let ctx = PageContext::new(Locale::En);
        let l = composer.localized(ctx.locale);
        let profile = BusinessProfile::default();
        let contact = composer.contact_links(&l, &profile).unwrap();

        let footer = composer.footer(&ctx, &l, &profile, &[], &contact).unwrap();
        let year = Utc::now().year().to_string();

        assert!(footer.copyright.contains(&year));
        assert!(!footer.copyright.contains("{year}"));
        assert_eq!(footer.quick_links.len(), 5);
        assert_eq!(footer.quick_links[2].href, "/en#services");
    }

    #[test]
    fn failed_queries_degrade_to_empty() {
        let rows: Vec<Service> = or_empty(
            "services",
            Err(BrowseContentError::QueryFailed("down".to_string())),
        );
        assert!(rows.is_empty());
    }
}
