// src/modules/site/application/domain/business_profile.rs

use crate::modules::content::application::domain::{Bilingual, CompanyInfo, CompanyInfoKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpeningHours {
    /// schema.org day names.
    pub days: Vec<String>,
    pub opens: String,
    pub closes: String,
}

/// Deployment-specific values read from the environment. `None` keeps the built-in fact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteSettings {
    pub site_url: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub map_embed_url: Option<String>,
    pub hero_video_id: Option<String>,
}

/// Static facts about the business, used by metadata, contact links and embeds.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessProfile {
    pub name: Bilingual<String>,
    pub og_image_alt: Bilingual<String>,
    /// JSON-LD description.
    pub description: Bilingual<String>,
    pub locality: Bilingual<String>,
    pub country_code: String,
    /// Overrides the catalog's contact address when set.
    pub address: Option<Bilingual<String>>,
    pub seo_title: Bilingual<String>,
    pub seo_description: Bilingual<String>,
    pub keywords: Bilingual<Vec<String>>,
    pub category: Bilingual<String>,
    pub offer_catalog_name: Bilingual<String>,
    pub offered_services: Vec<Bilingual<String>>,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub site_url: String,
    pub logo_path: String,
    pub og_image_path: String,
    pub og_image_size: (u32, u32),
    pub geo: GeoPoint,
    /// Pin shown on the embedded map and used for directions.
    pub map_pin: GeoPoint,
    pub map_embed_url: Option<String>,
    pub hero_video_id: Option<String>,
    pub opening_hours: OpeningHours,
    pub price_range: String,
    pub social_profiles: Vec<String>,
    pub twitter_handle: String,
}

const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3709.6777826285066!2d39.17243!3d21.54238!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMjHCsDMyJzMyLjYiTiAzOcKwMTAnMjAuNyJF!5e0!3m2!1sen!2ssa!4v1234567890";

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: Bilingual::text("فن المظلات", "Fan Al-Mazallat"),
            og_image_alt: Bilingual::text(
                "فن المظلات - مظلات وسواتر جدة",
                "Fan Al-Mazallat - Shades & Screens Jeddah",
            ),
            description: Bilingual::text(
                "شركة متخصصة في تركيب المظلات والسواتر والبرجولات والهناجر في جدة",
                "Specialized company in installing shades, screens, pergolas and hangars in Jeddah",
            ),
            locality: Bilingual::text("جدة", "Jeddah"),
            country_code: "SA".to_string(),
            address: None,
            seo_title: Bilingual::text(
                "فن المظلات | مظلات وسواتر جدة - أفضل أسعار المظلات في السعودية",
                "Fan Al-Mazallat | Car Shades & Screens Jeddah - Best Prices in Saudi Arabia",
            ),
            seo_description: Bilingual::text(
                "فن المظلات - أفضل شركة مظلات وسواتر في جدة. نقدم مظلات سيارات، سواتر، برجولات، وهناجر بجودة عالية وضمان 10 سنوات. اتصل الآن للحصول على عرض سعر مجاني!",
                "Fan Al-Mazallat - Best car shades and screens company in Jeddah. We provide car shades, privacy screens, pergolas, and hangars with high quality and 10-year warranty. Call now for a free quote!",
            ),
            keywords: Bilingual::new(
                words(&[
                    "مظلات",
                    "سواتر",
                    "مظلات سيارات",
                    "مظلات جدة",
                    "سواتر جدة",
                    "برجولات",
                    "هناجر",
                    "تركيب مظلات",
                    "أسعار المظلات",
                    "فن المظلات",
                    "مظلات السعودية",
                ]),
                words(&[
                    "car shades",
                    "privacy screens",
                    "pergolas",
                    "hangars",
                    "shading solutions",
                    "Jeddah shades",
                    "Saudi Arabia",
                    "Fan Al-Mazallat",
                    "awnings",
                ]),
            ),
            category: Bilingual::text("خدمات", "Services"),
            offer_catalog_name: Bilingual::text("خدماتنا", "Our Services"),
            offered_services: vec![
                Bilingual::text("مظلات السيارات", "Car Shades"),
                Bilingual::text("السواتر", "Privacy Screens"),
                Bilingual::text("البرجولات", "Pergolas"),
                Bilingual::text("الهناجر", "Hangars"),
            ],
            phone: "+966538256520".to_string(),
            whatsapp: "+966538256520".to_string(),
            email: "info@fan-almizallat.com".to_string(),
            site_url: "https://fan-almizallat.com".to_string(),
            logo_path: "/logo.png".to_string(),
            og_image_path: "/og-image.jpg".to_string(),
            og_image_size: (1200, 630),
            geo: GeoPoint {
                latitude: 21.342717,
                longitude: 39.005156,
            },
            map_pin: GeoPoint {
                latitude: 21.54238,
                longitude: 39.17243,
            },
            map_embed_url: Some(DEFAULT_MAP_EMBED_URL.to_string()),
            hero_video_id: Some("vcu2xyCyqps".to_string()),
            opening_hours: OpeningHours {
                days: words(&[
                    "Saturday",
                    "Sunday",
                    "Monday",
                    "Tuesday",
                    "Wednesday",
                    "Thursday",
                ]),
                opens: "08:00".to_string(),
                closes: "18:00".to_string(),
            },
            price_range: "$$".to_string(),
            social_profiles: words(&[
                "https://instagram.com/fanalmizallat",
                "https://twitter.com/fanalmizallat",
            ]),
            twitter_handle: "@fanalmizallat".to_string(),
        }
    }
}

impl BusinessProfile {
    /// Applies environment overrides on top of the built-in facts.
    pub fn with_settings(mut self, settings: &SiteSettings) -> Self {
        if let Some(url) = &settings.site_url {
            self.site_url = url.trim_end_matches('/').to_string();
        }
        if let Some(phone) = &settings.phone {
            self.phone = phone.clone();
        }
        if let Some(whatsapp) = &settings.whatsapp {
            self.whatsapp = whatsapp.clone();
        }
        if let Some(email) = &settings.email {
            self.email = email.clone();
        }
        if settings.map_embed_url.is_some() {
            self.map_embed_url = settings.map_embed_url.clone();
        }
        if settings.hero_video_id.is_some() {
            self.hero_video_id = settings.hero_video_id.clone();
        }
        self
    }

    /// Contact values stored in `company_info` win over configuration.
    pub fn with_company_info(&self, rows: &[CompanyInfo]) -> Self {
        let mut profile = self.clone();

        for row in rows {
            match row.key.as_str() {
                CompanyInfoKey::PHONE => profile.phone = row.value.en.clone(),
                CompanyInfoKey::WHATSAPP => profile.whatsapp = row.value.en.clone(),
                CompanyInfoKey::EMAIL => profile.email = row.value.en.clone(),
                CompanyInfoKey::ADDRESS => profile.address = Some(row.value.clone()),
                _ => {}
            }
        }

        profile
    }

    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
