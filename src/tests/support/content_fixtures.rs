use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::content::application::domain::{
    Bilingual, CompanyInfo, CompanyInfoKey, ContentKind, ContentMeta, Faq, HeroSlide, Project,
    Rating, Service, ServiceFeature, Slug, Testimonial,
};
use crate::modules::content::application::ports::outgoing::{
    ContentQuery, ContentQueryError, ContentRepository, ContentRepositoryError, NewCompanyInfo,
    NewFaq, NewHeroSlide, NewProject, NewService, NewServiceFeature, NewTestimonial, PatchField,
    ProjectFilter, TestimonialPatch,
};

//
// ──────────────────────────────────────────────────────────
// Record builders
// ──────────────────────────────────────────────────────────
//

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub fn meta(order: i32, is_active: bool) -> ContentMeta {
    let at = base_time();
    ContentMeta {
        id: Uuid::new_v4(),
        order,
        is_active,
        created_at: at,
        updated_at: at,
    }
}

fn fresh_meta(order: i32, is_active: bool) -> ContentMeta {
    let at = Utc::now();
    ContentMeta {
        id: Uuid::new_v4(),
        order,
        is_active,
        created_at: at,
        updated_at: at,
    }
}

/// English question doubles as the lookup key in assertions.
pub fn faq(key: &str, order: i32, active: bool) -> Faq {
    Faq {
        meta: meta(order, active),
        question: Bilingual::new(format!("سؤال {key}"), key.to_string()),
        answer: Bilingual::new(format!("جواب {key}"), format!("Answer {key}")),
    }
}

pub fn service(slug: &str, order: i32, active: bool) -> Service {
    Service {
        meta: meta(order, active),
        slug: Slug::parse(slug).unwrap(),
        title: Bilingual::new(format!("خدمة {slug}"), format!("Service {slug}")),
        description: Bilingual::new(format!("وصف {slug}"), format!("About {slug}")),
        short_description: Bilingual::new(None, None),
        icon_name: None,
        image_url: None,
    }
}

pub fn project(
    title_en: &str,
    category: Option<&str>,
    featured: bool,
    order: i32,
    active: bool,
) -> Project {
    Project {
        meta: meta(order, active),
        title: Bilingual::new(format!("مشروع {title_en}"), title_en.to_string()),
        description: Bilingual::new(None, None),
        image_urls: vec![format!("https://cdn.example.com/{title_en}.jpg")],
        category: category.map(str::to_string),
        location: Some("Jeddah".to_string()),
        year: Some("2024".to_string()),
        is_featured: featured,
    }
}

pub fn testimonial(name_en: &str, rating: f64, order: i32, active: bool) -> Testimonial {
    Testimonial {
        meta: meta(order, active),
        name: Bilingual::new(format!("عميل {name_en}"), name_en.to_string()),
        content: Bilingual::text("خدمة ممتازة", "Excellent service"),
        rating: Rating::from_f64(rating).unwrap(),
        company: None,
        image_url: None,
    }
}

pub fn hero_slide(title_en: &str, order: i32, active: bool) -> HeroSlide {
    HeroSlide {
        meta: meta(order, active),
        title: Bilingual::new(format!("عنوان {title_en}"), title_en.to_string()),
        subtitle: Bilingual::new(None, None),
        youtube_url: None,
        image_url: Some("https://cdn.example.com/hero.jpg".to_string()),
        cta_text: Bilingual::new(Some("اطلب الآن".to_string()), Some("Order now".to_string())),
        cta_link: Some("#contact".to_string()),
    }
}

pub fn feature(title_en: &str, order: i32, active: bool) -> ServiceFeature {
    ServiceFeature {
        meta: meta(order, active),
        title: Bilingual::new(format!("ميزة {title_en}"), title_en.to_string()),
        description: Bilingual::new(None, None),
        icon_name: Some("Shield".to_string()),
    }
}

pub fn company_info(key: &str, ar: &str, en: &str) -> CompanyInfo {
    CompanyInfo {
        meta: meta(0, true),
        key: CompanyInfoKey::parse(key).unwrap(),
        value: Bilingual::text(ar, en),
    }
}

//
// ──────────────────────────────────────────────────────────
// InMemoryContentQuery
// ──────────────────────────────────────────────────────────
// Returns rows as stored (unsorted, inactive included) so callers must
// apply the visibility rules themselves.
//

#[derive(Debug, Clone, Default)]
pub struct InMemoryContentQuery {
    pub hero_slides: Vec<HeroSlide>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
    pub features: Vec<ServiceFeature>,
    pub company_info: Vec<CompanyInfo>,
    pub fail: bool,
}

impl InMemoryContentQuery {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn guard(&self) -> Result<(), ContentQueryError> {
        if self.fail {
            Err(ContentQueryError::DatabaseError(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContentQuery for InMemoryContentQuery {
    async fn active_hero_slides(&self) -> Result<Vec<HeroSlide>, ContentQueryError> {
        self.guard()?;
        Ok(self.hero_slides.clone())
    }

    async fn active_services(&self) -> Result<Vec<Service>, ContentQueryError> {
        self.guard()?;
        Ok(self.services.clone())
    }

    async fn active_service_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Service>, ContentQueryError> {
        self.guard()?;
        Ok(self.services.iter().find(|s| s.slug.as_str() == slug).cloned())
    }

    async fn active_projects(
        &self,
        _filter: &ProjectFilter,
    ) -> Result<Vec<Project>, ContentQueryError> {
        self.guard()?;
        Ok(self.projects.clone())
    }

    async fn active_testimonials(&self) -> Result<Vec<Testimonial>, ContentQueryError> {
        self.guard()?;
        Ok(self.testimonials.clone())
    }

    async fn active_faqs(&self) -> Result<Vec<Faq>, ContentQueryError> {
        self.guard()?;
        Ok(self.faqs.clone())
    }

    async fn active_service_features(&self) -> Result<Vec<ServiceFeature>, ContentQueryError> {
        self.guard()?;
        Ok(self.features.clone())
    }

    async fn active_company_info(&self) -> Result<Vec<CompanyInfo>, ContentQueryError> {
        self.guard()?;
        Ok(self.company_info.clone())
    }
}

//
// ──────────────────────────────────────────────────────────
// InMemoryContentStore (read + write)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    rows: Arc<Mutex<InMemoryContentQuery>>,
    fail_writes: Option<ContentRepositoryError>,
}

impl InMemoryContentStore {
    pub fn failing(err: ContentRepositoryError) -> Self {
        Self {
            fail_writes: Some(err),
            ..Default::default()
        }
    }

    pub fn row_count(&self, kind: ContentKind) -> usize {
        let rows = self.rows.lock().unwrap();
        match kind {
            ContentKind::HeroSlide => rows.hero_slides.len(),
            ContentKind::Service => rows.services.len(),
            ContentKind::Project => rows.projects.len(),
            ContentKind::Testimonial => rows.testimonials.len(),
            ContentKind::Faq => rows.faqs.len(),
            ContentKind::ServiceFeature => rows.features.len(),
            ContentKind::CompanyInfo => rows.company_info.len(),
        }
    }

    fn snapshot(&self) -> InMemoryContentQuery {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ContentRepositoryError> {
        match &self.fail_writes {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

fn only_active<T: Clone>(rows: &[T], active: impl Fn(&T) -> bool) -> Vec<T> {
    rows.iter().filter(|r| active(r)).cloned().collect()
}

#[async_trait]
impl ContentQuery for InMemoryContentStore {
    async fn active_hero_slides(&self) -> Result<Vec<HeroSlide>, ContentQueryError> {
        Ok(only_active(&self.snapshot().hero_slides, |r| r.meta.is_active))
    }

    async fn active_services(&self) -> Result<Vec<Service>, ContentQueryError> {
        Ok(only_active(&self.snapshot().services, |r| r.meta.is_active))
    }

    async fn active_service_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Service>, ContentQueryError> {
        Ok(self
            .snapshot()
            .services
            .into_iter()
            .find(|s| s.meta.is_active && s.slug.as_str() == slug))
    }

    async fn active_projects(
        &self,
        _filter: &ProjectFilter,
    ) -> Result<Vec<Project>, ContentQueryError> {
        Ok(only_active(&self.snapshot().projects, |r| r.meta.is_active))
    }

    async fn active_testimonials(&self) -> Result<Vec<Testimonial>, ContentQueryError> {
        Ok(only_active(&self.snapshot().testimonials, |r| r.meta.is_active))
    }

    async fn active_faqs(&self) -> Result<Vec<Faq>, ContentQueryError> {
        Ok(only_active(&self.snapshot().faqs, |r| r.meta.is_active))
    }

    async fn active_service_features(&self) -> Result<Vec<ServiceFeature>, ContentQueryError> {
        Ok(only_active(&self.snapshot().features, |r| r.meta.is_active))
    }

    async fn active_company_info(&self) -> Result<Vec<CompanyInfo>, ContentQueryError> {
        Ok(only_active(&self.snapshot().company_info, |r| r.meta.is_active))
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentStore {
    async fn create_hero_slide(
        &self,
        data: NewHeroSlide,
    ) -> Result<HeroSlide, ContentRepositoryError> {
        self.check()?;
        let row = HeroSlide {
            meta: fresh_meta(data.order, data.is_active),
            title: data.title,
            subtitle: data.subtitle,
            youtube_url: data.youtube_url,
            image_url: data.image_url,
            cta_text: data.cta_text,
            cta_link: data.cta_link,
        };
        self.rows.lock().unwrap().hero_slides.push(row.clone());
        Ok(row)
    }

    async fn create_service(&self, data: NewService) -> Result<Service, ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.services.iter().any(|s| s.slug == data.slug) {
            return Err(ContentRepositoryError::SlugAlreadyExists);
        }
        let row = Service {
            meta: fresh_meta(data.order, data.is_active),
            slug: data.slug,
            title: data.title,
            description: data.description,
            short_description: data.short_description,
            icon_name: data.icon_name,
            image_url: data.image_url,
        };
        rows.services.push(row.clone());
        Ok(row)
    }

    async fn create_project(&self, data: NewProject) -> Result<Project, ContentRepositoryError> {
        self.check()?;
        let row = Project {
            meta: fresh_meta(data.order, data.is_active),
            title: data.title,
            description: data.description,
            image_urls: data.image_urls,
            category: data.category,
            location: data.location,
            year: data.year,
            is_featured: data.is_featured,
        };
        self.rows.lock().unwrap().projects.push(row.clone());
        Ok(row)
    }

    async fn create_testimonial(
        &self,
        data: NewTestimonial,
    ) -> Result<Testimonial, ContentRepositoryError> {
        self.check()?;
        let row = Testimonial {
            meta: fresh_meta(data.order, data.is_active),
            name: data.name,
            content: data.content,
            rating: data.rating,
            company: data.company,
            image_url: data.image_url,
        };
        self.rows.lock().unwrap().testimonials.push(row.clone());
        Ok(row)
    }

    async fn create_faq(&self, data: NewFaq) -> Result<Faq, ContentRepositoryError> {
        self.check()?;
        let row = Faq {
            meta: fresh_meta(data.order, data.is_active),
            question: data.question,
            answer: data.answer,
        };
        self.rows.lock().unwrap().faqs.push(row.clone());
        Ok(row)
    }

    async fn create_service_feature(
        &self,
        data: NewServiceFeature,
    ) -> Result<ServiceFeature, ContentRepositoryError> {
        self.check()?;
        let row = ServiceFeature {
            meta: fresh_meta(data.order, data.is_active),
            title: data.title,
            description: data.description,
            icon_name: data.icon_name,
        };
        self.rows.lock().unwrap().features.push(row.clone());
        Ok(row)
    }

    async fn create_company_info(
        &self,
        data: NewCompanyInfo,
    ) -> Result<CompanyInfo, ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.company_info.iter().any(|c| c.key == data.key) {
            return Err(ContentRepositoryError::KeyAlreadyExists);
        }
        let row = CompanyInfo {
            meta: fresh_meta(0, true),
            key: data.key,
            value: data.value,
        };
        rows.company_info.push(row.clone());
        Ok(row)
    }

    async fn upsert_company_info(
        &self,
        data: NewCompanyInfo,
    ) -> Result<CompanyInfo, ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.company_info.iter_mut().find(|c| c.key == data.key) {
            existing.value = data.value;
            existing.meta.updated_at = Utc::now();
            return Ok(existing.clone());
        }
        let row = CompanyInfo {
            meta: fresh_meta(0, true),
            key: data.key,
            value: data.value,
        };
        rows.company_info.push(row.clone());
        Ok(row)
    }

    async fn patch_testimonial(
        &self,
        id: Uuid,
        patch: TestimonialPatch,
    ) -> Result<Testimonial, ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .testimonials
            .iter_mut()
            .find(|t| t.meta.id == id)
            .ok_or(ContentRepositoryError::NotFound)?;

        fn apply<T>(target: &mut T, field: PatchField<T>) {
            if let PatchField::Value(v) = field {
                *target = v;
            }
        }
        fn apply_opt<T>(target: &mut Option<T>, field: PatchField<T>) {
            match field {
                PatchField::Unset => {}
                PatchField::Null => *target = None,
                PatchField::Value(v) => *target = Some(v),
            }
        }

        apply(&mut row.name.ar, patch.name_ar);
        apply(&mut row.name.en, patch.name_en);
        apply(&mut row.content.ar, patch.content_ar);
        apply(&mut row.content.en, patch.content_en);
        apply(&mut row.rating, patch.rating);
        apply(&mut row.meta.order, patch.order);
        apply_opt(&mut row.company, patch.company);
        apply_opt(&mut row.image_url, patch.image_url);
        row.meta.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn set_active(
        &self,
        kind: ContentKind,
        id: Uuid,
        active: bool,
    ) -> Result<(), ContentRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();

        let meta = match kind {
            ContentKind::HeroSlide => rows.hero_slides.iter_mut().map(|r| &mut r.meta).find(|m| m.id == id),
            ContentKind::Service => rows.services.iter_mut().map(|r| &mut r.meta).find(|m| m.id == id),
            ContentKind::Project => rows.projects.iter_mut().map(|r| &mut r.meta).find(|m| m.id == id),
            ContentKind::Testimonial => rows.testimonials.iter_mut().map(|r| &mut r.meta).find(|m| m.id == id),
            ContentKind::Faq => rows.faqs.iter_mut().map(|r| &mut r.meta).find(|m| m.id == id),
            ContentKind::ServiceFeature => rows.features.iter_mut().map(|r| &mut r.meta).find(|m| m.id == id),
            ContentKind::CompanyInfo => rows.company_info.iter_mut().map(|r| &mut r.meta).find(|m| m.id == id),
        };

        let meta = meta.ok_or(ContentRepositoryError::NotFound)?;
        meta.is_active = active;
        meta.updated_at = Utc::now();
        Ok(())
    }
}
