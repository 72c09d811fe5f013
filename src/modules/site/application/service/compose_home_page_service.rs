use async_trait::async_trait;
use std::mem;

use super::localized_content::LocalizedContent;
use super::page_composer::{or_empty, PageComposer};
use crate::modules::catalog::application::defaults::{ABOUT_STATS, DEFAULT_FAQS, DEFAULT_FEATURES};
use crate::modules::catalog::application::ports::outgoing::CatalogError;
use crate::modules::content::application::domain::{
    Faq, HeroSlide, Project, ServiceFeature, Testimonial,
};
use crate::modules::content::application::ports::outgoing::ProjectFilter;
use crate::modules::locale::application::domain::PageContext;
use crate::modules::site::application::domain::{
    AboutSection, BusinessProfile, ContactForm, ContactInfo, ContactLinks, ContactSection,
    EmbedState, FaqItem, FaqSection, FeatureView, FormField, HeroSection, HeroSlideView,
    HomePage, Link, MapCard, MapSection, PageHead, ProjectsSection, Section, SectionKind,
    SelectOption, ServiceCard, ServicesSection, Stat, TestimonialView, TestimonialsBlock,
    WhyUsSection,
};
use crate::modules::site::application::ports::incoming::use_cases::{
    ComposeHomePageUseCase, ComposePageError,
};

#[async_trait]
impl ComposeHomePageUseCase for PageComposer {
    async fn execute(&self, ctx: PageContext) -> Result<HomePage, ComposePageError> {
        let all_projects = ProjectFilter::default();
        let (slides, services, projects, testimonials, faqs, features, company_info) = tokio::join!(
            self.browse.hero_slides(),
            self.browse.services(),
            self.browse.projects(&all_projects),
            self.browse.testimonials(),
            self.browse.faqs(),
            self.browse.service_features(),
            self.browse.company_info(),
        );

        let profile = self
            .profile
            .with_company_info(&or_empty("company info", company_info));
        let l = self.localized(ctx.locale);
        let contact = self.contact_links(&l, &profile)?;
        let service_cards = self.service_cards(&ctx, &l, or_empty("services", services))?;

        let mut slides = or_empty("hero slides", slides);
        let mut projects = or_empty("projects", projects);
        let mut testimonials = or_empty("testimonials", testimonials);
        let mut faqs = or_empty("faqs", faqs);
        let mut features = or_empty("service features", features);

        let mut sections = Vec::with_capacity(SectionKind::HOME_ORDER.len());
        for kind in SectionKind::HOME_ORDER {
            let section = match kind {
                SectionKind::Hero => Section::Hero(hero_section(
                    &ctx,
                    &l,
                    &profile,
                    &contact,
                    mem::take(&mut slides),
                )?),
                SectionKind::About => Section::About(about_section(&l)?),
                SectionKind::Services => Section::Services(ServicesSection {
                    title: l.t("ServicesSection.title")?,
                    subtitle: l.t("ServicesSection.subtitle")?,
                    items: service_cards.clone(),
                }),
                SectionKind::Projects => Section::Projects(self.projects_section(
                    &ctx,
                    &l,
                    mem::take(&mut projects),
                )?),
                SectionKind::WhyUs => Section::WhyUs(why_us_section(
                    &l,
                    mem::take(&mut features),
                    mem::take(&mut testimonials),
                )?),
                SectionKind::Faq => Section::Faq(faq_section(&l, mem::take(&mut faqs))?),
                SectionKind::Contact => Section::Contact(contact_section(
                    &ctx,
                    &l,
                    &profile,
                    &contact,
                    &service_cards,
                )?),
                SectionKind::Map => Section::Map(map_section(&l, &profile, &contact)?),
            };
            sections.push(section);
        }

        let alternate_path = ctx.alternate_path("");

        Ok(HomePage {
            metadata: self.metadata(&ctx, PageHead::default()),
            navigation: self.navigation(&ctx, &l, &alternate_path, &contact)?,
            footer: self.footer(&ctx, &l, &profile, &service_cards, &contact)?,
            alternate_path,
            sections,
            context: ctx,
        })
    }
}

// ============================================================================
// Section builders
// ============================================================================

impl PageComposer {
    /// Home grid shows the first visible projects; the listing page has the rest.
    fn projects_section(
        &self,
        ctx: &PageContext,
        l: &LocalizedContent<'_>,
        projects: Vec<Project>,
    ) -> Result<ProjectsSection, CatalogError> {
        let items = projects
            .into_iter()
            .take(self.visible_projects)
            .map(|p| self.project_card(l, p))
            .collect::<Result<Vec<_>, _>>()?;

        let empty_text = if items.is_empty() {
            Some(l.t("ProjectsSection.empty")?)
        } else {
            None
        };

        Ok(ProjectsSection {
            title: l.t("ProjectsSection.title")?,
            subtitle: l.t("ProjectsSection.subtitle")?,
            categories: self.category_tabs(ctx, l, None)?,
            items,
            empty_text,
            view_all: Link::new(l.t("ProjectsSection.viewAll")?, ctx.path("projects")),
        })
    }
}

/// Catalog headline stands in for the slides when the store has none.
fn hero_section(
    ctx: &PageContext,
    l: &LocalizedContent<'_>,
    profile: &BusinessProfile,
    contact: &ContactLinks,
    slides: Vec<HeroSlide>,
) -> Result<HeroSection, CatalogError> {
    let slides = if slides.is_empty() {
        vec![HeroSlideView {
            title: l.t("HeroSection.title")?,
            subtitle: Some(l.t("HeroSection.subtitle")?),
            image_url: None,
            cta: None,
        }]
    } else {
        slides
            .into_iter()
            .map(|s| HeroSlideView {
                title: l.text(&s.title),
                subtitle: l.opt_text(&s.subtitle),
                image_url: s.image_url,
                cta: l
                    .opt_text(&s.cta_text)
                    .zip(s.cta_link)
                    .map(|(label, href)| Link::new(label, href)),
            })
            .collect()
    };

    let contact_anchor = format!("{}#{}", ctx.path(""), SectionKind::Contact.anchor());

    Ok(HeroSection {
        slides,
        video: EmbedState::youtube(
            profile.hero_video_id.as_deref(),
            l.t("HeroSection.videoPlaceholder")?,
        ),
        buttons: vec![
            Link::new(l.t("HeroSection.buttons.whatsapp")?, contact.whatsapp.clone()),
            Link::new(l.t("HeroSection.buttons.quote")?, contact_anchor),
            Link::new(l.t("HeroSection.buttons.call")?, contact.tel.clone()),
        ],
        badges: vec![
            l.t("HeroSection.badges.guarantee")?,
            l.t("HeroSection.badges.quality")?,
            l.t("HeroSection.badges.speed")?,
        ],
    })
}

fn about_section(l: &LocalizedContent<'_>) -> Result<AboutSection, CatalogError> {
    let stats = ABOUT_STATS
        .iter()
        .map(|(value, key)| {
            Ok(Stat {
                value: value.to_string(),
                label: l.t(key)?,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    Ok(AboutSection {
        title: l.t("AboutSection.title")?,
        subtitle: l.t("AboutSection.subtitle")?,
        paragraphs: vec![l.t("AboutSection.paragraph1")?, l.t("AboutSection.paragraph2")?],
        stats,
    })
}

fn why_us_section(
    l: &LocalizedContent<'_>,
    features: Vec<ServiceFeature>,
    testimonials: Vec<Testimonial>,
) -> Result<WhyUsSection, CatalogError> {
    let features = if features.is_empty() {
        DEFAULT_FEATURES
            .iter()
            .map(|(key, icon)| {
                let base = format!("WhyUsSection.features.{key}");
                Ok(FeatureView {
                    title: l.t(&format!("{base}.title"))?,
                    description: Some(l.t(&format!("{base}.description"))?),
                    icon: Some(icon.to_string()),
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?
    } else {
        features
            .into_iter()
            .map(|f| FeatureView {
                title: l.text(&f.title),
                description: l.opt_text(&f.description),
                icon: f.icon_name,
            })
            .collect()
    };

    // no catalog fallback for testimonials
    let testimonials = if testimonials.is_empty() {
        None
    } else {
        Some(TestimonialsBlock {
            title: l.t("WhyUsSection.testimonialsTitle")?,
            items: testimonials
                .into_iter()
                .map(|t| TestimonialView {
                    name: l.text(&t.name),
                    content: l.text(&t.content),
                    rating: t.rating.value(),
                    company: t.company,
                    image_url: t.image_url,
                })
                .collect(),
        })
    };

    Ok(WhyUsSection {
        title: l.t("WhyUsSection.title")?,
        subtitle: l.t("WhyUsSection.subtitle")?,
        features,
        testimonials,
    })
}

fn faq_section(l: &LocalizedContent<'_>, faqs: Vec<Faq>) -> Result<FaqSection, CatalogError> {
    let items = if faqs.is_empty() {
        DEFAULT_FAQS
            .iter()
            .map(|key| {
                let base = format!("FAQSection.faqs.{key}");
                Ok(FaqItem {
                    question: l.t(&format!("{base}.question"))?,
                    answer: l.t(&format!("{base}.answer"))?,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?
    } else {
        faqs.into_iter()
            .map(|f| FaqItem {
                question: l.text(&f.question),
                answer: l.text(&f.answer),
            })
            .collect()
    };

    Ok(FaqSection {
        title: l.t("FAQSection.title")?,
        subtitle: l.t("FAQSection.subtitle")?,
        items,
    })
}

fn contact_section(
    ctx: &PageContext,
    l: &LocalizedContent<'_>,
    profile: &BusinessProfile,
    contact: &ContactLinks,
    services: &[ServiceCard],
) -> Result<ContactSection, CatalogError> {
    let address = match &profile.address {
        Some(address) => l.text(address),
        None => l.t("ContactSection.info.address")?,
    };

    let field = |name: &str, placeholder: Option<&str>| -> Result<FormField, CatalogError> {
        Ok(FormField {
            name: name.to_string(),
            label: l.t(&format!("ContactSection.form.{name}"))?,
            placeholder: placeholder
                .map(|key| l.t(&format!("ContactSection.form.{key}")))
                .transpose()?,
        })
    };

    let service_options = services
        .iter()
        .map(|s| SelectOption {
            value: s.slug.clone(),
            label: s.title.clone(),
        })
        .collect();

    Ok(ContactSection {
        title: l.t("ContactSection.title")?,
        subtitle: l.t("ContactSection.subtitle")?,
        info: ContactInfo {
            title: l.t("ContactSection.info.title")?,
            phone_label: l.t("ContactSection.info.phone")?,
            email_label: l.t("ContactSection.info.email")?,
            address,
            hours: l.t("ContactSection.info.hours")?,
        },
        links: contact.clone(),
        buttons: vec![
            Link::new(l.t("ContactSection.buttons.whatsapp")?, contact.whatsapp.clone()),
            Link::new(l.t("ContactSection.buttons.call")?, contact.tel.clone()),
        ],
        form: ContactForm {
            title: l.t("ContactSection.form.title")?,
            action: ctx.path("contact"),
            fields: vec![
                field("name", Some("namePlaceholder"))?,
                field("phone", Some("phonePlaceholder"))?,
                field("service", None)?,
                field("message", Some("messagePlaceholder"))?,
            ],
            service_placeholder: l.t("ContactSection.form.selectService")?,
            service_options,
            submit: l.t("ContactSection.form.submit")?,
        },
    })
}

fn map_section(
    l: &LocalizedContent<'_>,
    profile: &BusinessProfile,
    contact: &ContactLinks,
) -> Result<MapSection, CatalogError> {
    let address = match &profile.address {
        Some(address) => l.text(address),
        None => l.t("MapSection.card.address")?,
    };

    Ok(MapSection {
        title: l.t("MapSection.title")?,
        subtitle: l.t("MapSection.subtitle")?,
        embed: EmbedState::from_url(
            profile.map_embed_url.as_deref(),
            l.t("MapSection.placeholder")?,
        ),
        card: MapCard {
            title: l.t("MapSection.card.title")?,
            address,
            directions: Link::new(
                l.t("MapSection.card.getDirections")?,
                contact.directions.clone(),
            ),
        },
    })
}
