// src/modules/content/adapter/outgoing/row_mapping.rs
//
// Row -> domain conversion shared by the query and repository adapters.
// Errors are plain messages; each adapter wraps them in its own error type.

use sea_orm::prelude::{DateTimeWithTimeZone, Json};
use uuid::Uuid;

use super::sea_orm_entity::{
    company_info, faqs, hero_slides, projects, service_features, services, testimonials,
};
use crate::modules::content::application::domain::{
    Bilingual, CompanyInfo, CompanyInfoKey, ContentMeta, Faq, HeroSlide, Project, Rating, Service,
    ServiceFeature, Slug, Testimonial,
};

fn meta(
    id: Uuid,
    order: i32,
    is_active: bool,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
) -> ContentMeta {
    ContentMeta {
        id,
        order,
        is_active,
        created_at: created_at.into(),
        updated_at: updated_at.into(),
    }
}

pub(crate) fn image_urls_to_json(urls: &[String]) -> Json {
    Json::from(urls.to_vec())
}

fn image_urls_from_json(id: Uuid, json: &Json) -> Result<Vec<String>, String> {
    serde_json::from_value(json.clone())
        .map_err(|e| format!("projects.image_urls of {id} is not a string array: {e}"))
}

pub(crate) fn hero_slide(m: hero_slides::Model) -> HeroSlide {
    HeroSlide {
        meta: meta(m.id, m.order, m.is_active, m.created_at, m.updated_at),
        title: Bilingual::new(m.title_ar, m.title_en),
        subtitle: Bilingual::new(m.subtitle_ar, m.subtitle_en),
        youtube_url: m.youtube_url,
        image_url: m.image_url,
        cta_text: Bilingual::new(m.cta_text_ar, m.cta_text_en),
        cta_link: m.cta_link,
    }
}

pub(crate) fn service(m: services::Model) -> Result<Service, String> {
    let slug = Slug::parse(&m.slug).map_err(|e| format!("services.slug of {}: {e}", m.id))?;

    Ok(Service {
        meta: meta(m.id, m.order, m.is_active, m.created_at, m.updated_at),
        slug,
        title: Bilingual::new(m.title_ar, m.title_en),
        description: Bilingual::new(m.description_ar, m.description_en),
        short_description: Bilingual::new(m.short_description_ar, m.short_description_en),
        icon_name: m.icon_name,
        image_url: m.image_url,
    })
}

pub(crate) fn project(m: projects::Model) -> Result<Project, String> {
    let image_urls = image_urls_from_json(m.id, &m.image_urls)?;

    Ok(Project {
        meta: meta(m.id, m.order, m.is_active, m.created_at, m.updated_at),
        title: Bilingual::new(m.title_ar, m.title_en),
        description: Bilingual::new(m.description_ar, m.description_en),
        image_urls,
        category: m.category,
        location: m.location,
        year: m.year,
        is_featured: m.is_featured,
    })
}

pub(crate) fn testimonial(m: testimonials::Model) -> Result<Testimonial, String> {
    let rating =
        Rating::from_tenths(m.rating).map_err(|e| format!("testimonials.rating of {}: {e}", m.id))?;

    Ok(Testimonial {
        meta: meta(m.id, m.order, m.is_active, m.created_at, m.updated_at),
        name: Bilingual::new(m.name_ar, m.name_en),
        content: Bilingual::new(m.content_ar, m.content_en),
        rating,
        company: m.company,
        image_url: m.image_url,
    })
}

pub(crate) fn faq(m: faqs::Model) -> Faq {
    Faq {
        meta: meta(m.id, m.order, m.is_active, m.created_at, m.updated_at),
        question: Bilingual::new(m.question_ar, m.question_en),
        answer: Bilingual::new(m.answer_ar, m.answer_en),
    }
}

pub(crate) fn service_feature(m: service_features::Model) -> ServiceFeature {
    ServiceFeature {
        meta: meta(m.id, m.order, m.is_active, m.created_at, m.updated_at),
        title: Bilingual::new(m.title_ar, m.title_en),
        description: Bilingual::new(m.description_ar, m.description_en),
        icon_name: m.icon_name,
    }
}

pub(crate) fn company_info(m: company_info::Model) -> Result<CompanyInfo, String> {
    let key =
        CompanyInfoKey::parse(&m.key).map_err(|e| format!("company_info.key of {}: {e}", m.id))?;

    Ok(CompanyInfo {
        meta: meta(m.id, m.order, m.is_active, m.created_at, m.updated_at),
        key,
        value: Bilingual::new(m.value_ar, m.value_en),
    })
}
