// src/modules/site/application/domain/metadata.rs

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::business_profile::BusinessProfile;
use crate::modules::locale::application::domain::{localized_path, Locale, PageContext};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: String,
    pub locale: String,
    pub alternate_locale: String,
    pub url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub images: Vec<OpenGraphImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub max_image_preview: String,
    pub max_video_preview: i32,
    pub max_snippet: i32,
}

impl Default for Robots {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            max_image_preview: "large".to_string(),
            max_video_preview: -1,
            max_snippet: -1,
        }
    }
}

/// Document head for one localized page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub category: String,
    pub canonical: String,
    /// Locale code -> absolute URL of the same page.
    pub alternates: BTreeMap<String, String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    #[schema(value_type = Object)]
    pub json_ld: Value,
}

/// What distinguishes one page's head from the site default.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageHead<'a> {
    /// Locale-less path, e.g. `/services/carShades`.
    pub path: &'a str,
    /// Rendered through the `"%s | <site name>"` template.
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Pure function of the locale, the business facts and the page.
pub fn page_metadata(ctx: &PageContext, profile: &BusinessProfile, head: PageHead<'_>) -> PageMetadata {
    let locale = ctx.locale;
    let site_name = profile.name.get(locale).clone();

    let title = match head.title {
        Some(page_title) => format!("{page_title} | {site_name}"),
        None => profile.seo_title.get(locale).clone(),
    };
    let description = head
        .description
        .map(str::to_string)
        .unwrap_or_else(|| profile.seo_description.get(locale).clone());

    let canonical = profile.absolute_url(&ctx.path(head.path));
    let alternates = Locale::ALL
        .into_iter()
        .map(|l| {
            (
                l.code().to_string(),
                profile.absolute_url(&localized_path(l, head.path)),
            )
        })
        .collect();

    let og_image = profile.absolute_url(&profile.og_image_path);
    let (width, height) = profile.og_image_size;

    PageMetadata {
        open_graph: OpenGraph {
            og_type: "website".to_string(),
            locale: locale.open_graph_locale().to_string(),
            alternate_locale: locale.alternate().open_graph_locale().to_string(),
            url: canonical.clone(),
            site_name,
            title: title.clone(),
            description: description.clone(),
            images: vec![OpenGraphImage {
                url: og_image.clone(),
                width,
                height,
                alt: profile.og_image_alt.get(locale).clone(),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            title: title.clone(),
            description: description.clone(),
            images: vec![og_image],
            creator: profile.twitter_handle.clone(),
        },
        robots: Robots::default(),
        json_ld: local_business_json_ld(locale, profile),
        keywords: profile.keywords.get(locale).clone(),
        category: profile.category.get(locale).clone(),
        title,
        description,
        canonical,
        alternates,
    }
}

/// One schema.org `LocalBusiness` per page.
pub fn local_business_json_ld(locale: Locale, profile: &BusinessProfile) -> Value {
    let offers: Vec<Value> = profile
        .offered_services
        .iter()
        .map(|service| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": service.get(locale),
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": profile.name.get(locale),
        "description": profile.description.get(locale),
        "url": profile.site_url,
        "logo": profile.absolute_url(&profile.logo_path),
        "image": profile.absolute_url(&profile.og_image_path),
        "telephone": profile.phone,
        "email": profile.email,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": profile.locality.get(locale),
            "addressCountry": profile.country_code,
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": profile.geo.latitude,
            "longitude": profile.geo.longitude,
        },
        "openingHoursSpecification": {
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": profile.opening_hours.days,
            "opens": profile.opening_hours.opens,
            "closes": profile.opening_hours.closes,
        },
        "priceRange": profile.price_range,
        "sameAs": profile.social_profiles,
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": profile.offer_catalog_name.get(locale),
            "itemListElement": offers,
        },
    })
}
