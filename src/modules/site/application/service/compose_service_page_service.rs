use async_trait::async_trait;
use tracing::warn;

use super::page_composer::{or_empty, PageComposer};
use crate::modules::catalog::application::defaults::{is_default_service, DEFAULT_SERVICES};
use crate::modules::locale::application::domain::PageContext;
use crate::modules::site::application::domain::{
    Link, PageHead, SectionKind, ServiceDetail, ServicePage,
};
use crate::modules::site::application::ports::incoming::use_cases::{
    ComposePageError, ComposeServicePageUseCase,
};

#[async_trait]
impl ComposeServicePageUseCase for PageComposer {
    async fn execute(&self, ctx: PageContext, slug: &str) -> Result<ServicePage, ComposePageError> {
        let slug = slug.trim();
        let (found, services, company_info) = tokio::join!(
            self.browse.service_by_slug(slug),
            self.browse.services(),
            self.browse.company_info(),
        );

        let found = found.unwrap_or_else(|e| {
            warn!("Service lookup for '{}' fell back to the catalog: {}", slug, e);
            None
        });
        // Catalog services stand in only while the store has none, as on the home page.
        let services = or_empty("services", services);
        let catalog_fallback = services.is_empty();

        let l = self.localized(ctx.locale);

        let service = match found {
            Some(s) => ServiceDetail {
                title: l.text(&s.title),
                description: l.text(&s.description),
                short_description: l.opt_text(&s.short_description),
                icon: s.icon_name,
                image_url: s.image_url,
                slug: s.slug.into_inner(),
            },
            None if catalog_fallback && is_default_service(slug) => {
                let base = format!("ServicesSection.services.{slug}");
                ServiceDetail {
                    slug: slug.to_string(),
                    title: l.t(&format!("{base}.title"))?,
                    description: l.t(&format!("{base}.description"))?,
                    short_description: None,
                    icon: DEFAULT_SERVICES
                        .iter()
                        .find(|(key, _)| *key == slug)
                        .map(|(_, icon)| icon.to_string()),
                    image_url: None,
                }
            }
            None => return Err(ComposePageError::ServiceNotFound(slug.to_string())),
        };

        let profile = self
            .profile
            .with_company_info(&or_empty("company info", company_info));
        let contact = self.contact_links(&l, &profile)?;
        let service_cards = self.service_cards(&ctx, &l, services)?;

        let path = format!("services/{}", service.slug);
        let alternate_path = ctx.alternate_path(&path);
        let home = ctx.path("");

        let metadata = self.metadata(
            &ctx,
            PageHead {
                path: &path,
                title: Some(&service.title),
                description: Some(
                    service
                        .short_description
                        .as_deref()
                        .unwrap_or(&service.description),
                ),
            },
        );

        Ok(ServicePage {
            metadata,
            navigation: self.navigation(&ctx, &l, &alternate_path, &contact)?,
            back: Link::new(
                l.t("ServicesSection.backToServices")?,
                format!("{home}#{}", SectionKind::Services.anchor()),
            ),
            quote: Link::new(
                l.t("HeroSection.buttons.quote")?,
                format!("{home}#{}", SectionKind::Contact.anchor()),
            ),
            footer: self.footer(&ctx, &l, &profile, &service_cards, &contact)?,
            alternate_path,
            service,
            context: ctx,
        })
    }
}
