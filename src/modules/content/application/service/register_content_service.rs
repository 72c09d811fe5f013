use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::{
    BilingualText, CompanyInfo, CompanyInfoKey, ContentKind, ContentValidationError, Faq,
    HeroSlide, Project, Rating, Service, ServiceFeature, Slug, Testimonial,
};
use crate::modules::content::application::ports::{
    incoming::use_cases::{
        CreateServiceCommand, CreateTestimonialCommand, PatchTestimonialCommand,
        RegisterContentError, RegisterContentUseCase, UpsertCompanyInfoCommand,
    },
    outgoing::{
        ContentRepository, NewCompanyInfo, NewFaq, NewHeroSlide, NewProject, NewService,
        NewServiceFeature, NewTestimonial, PatchField, TestimonialPatch,
    },
};

fn require(field: &'static str, text: &impl BilingualText) -> Result<(), ContentValidationError> {
    if text.is_complete() {
        Ok(())
    } else {
        Err(ContentValidationError::IncompleteTranslation(field))
    }
}

/// Required text column: may be replaced, never cleared or blanked.
fn required_text(
    field: &'static str,
    patch: PatchField<String>,
) -> Result<PatchField<String>, ContentValidationError> {
    match patch {
        PatchField::Null => Err(ContentValidationError::RequiredField(field)),
        PatchField::Value(v) if v.trim().is_empty() => {
            Err(ContentValidationError::IncompleteTranslation(field))
        }
        other => Ok(other),
    }
}

fn validate_new_company_info(
    command: UpsertCompanyInfoCommand,
) -> Result<NewCompanyInfo, ContentValidationError> {
    let key = CompanyInfoKey::parse(&command.key)?;
    require("value", &command.value)?;
    Ok(NewCompanyInfo {
        key,
        value: command.value,
    })
}

#[derive(Debug, Clone)]
pub struct RegisterContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    repository: R,
}

impl<R> RegisterContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RegisterContentUseCase for RegisterContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn create_hero_slide(
        &self,
        data: NewHeroSlide,
    ) -> Result<HeroSlide, RegisterContentError> {
        require("title", &data.title)?;
        require("subtitle", &data.subtitle)?;
        require("cta_text", &data.cta_text)?;

        Ok(self.repository.create_hero_slide(data).await?)
    }

    async fn create_service(
        &self,
        command: CreateServiceCommand,
    ) -> Result<Service, RegisterContentError> {
        let slug = Slug::parse(&command.slug)?;
        require("title", &command.title)?;
        require("description", &command.description)?;
        require("short_description", &command.short_description)?;

        let data = NewService {
            slug,
            title: command.title,
            description: command.description,
            short_description: command.short_description,
            icon_name: command.icon_name,
            image_url: command.image_url,
            order: command.order,
            is_active: command.is_active,
        };

        Ok(self.repository.create_service(data).await?)
    }

    async fn create_project(&self, data: NewProject) -> Result<Project, RegisterContentError> {
        require("title", &data.title)?;
        require("description", &data.description)?;

        Ok(self.repository.create_project(data).await?)
    }

    async fn create_testimonial(
        &self,
        command: CreateTestimonialCommand,
    ) -> Result<Testimonial, RegisterContentError> {
        let rating = match command.rating {
            Some(value) => Rating::from_f64(value)?,
            None => Rating::default(),
        };
        require("name", &command.name)?;
        require("content", &command.content)?;

        let data = NewTestimonial {
            name: command.name,
            content: command.content,
            rating,
            company: command.company,
            image_url: command.image_url,
            order: command.order,
            is_active: command.is_active,
        };

        Ok(self.repository.create_testimonial(data).await?)
    }

    async fn create_faq(&self, data: NewFaq) -> Result<Faq, RegisterContentError> {
        require("question", &data.question)?;
        require("answer", &data.answer)?;

        Ok(self.repository.create_faq(data).await?)
    }

    async fn create_service_feature(
        &self,
        data: NewServiceFeature,
    ) -> Result<ServiceFeature, RegisterContentError> {
        require("title", &data.title)?;
        require("description", &data.description)?;

        Ok(self.repository.create_service_feature(data).await?)
    }

    async fn create_company_info(
        &self,
        command: UpsertCompanyInfoCommand,
    ) -> Result<CompanyInfo, RegisterContentError> {
        let data = validate_new_company_info(command)?;
        Ok(self.repository.create_company_info(data).await?)
    }

    async fn upsert_company_info(
        &self,
        command: UpsertCompanyInfoCommand,
    ) -> Result<CompanyInfo, RegisterContentError> {
        let data = validate_new_company_info(command)?;
        Ok(self.repository.upsert_company_info(data).await?)
    }

    async fn patch_testimonial(
        &self,
        id: Uuid,
        command: PatchTestimonialCommand,
    ) -> Result<Testimonial, RegisterContentError> {
        let rating = match command.rating {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => {
                return Err(ContentValidationError::RequiredField("rating").into());
            }
            PatchField::Value(v) => PatchField::Value(Rating::from_f64(v)?),
        };
        let order = match command.order {
            PatchField::Null => {
                return Err(ContentValidationError::RequiredField("order").into());
            }
            other => other,
        };

        let patch = TestimonialPatch {
            name_ar: required_text("name", command.name_ar)?,
            name_en: required_text("name", command.name_en)?,
            content_ar: required_text("content", command.content_ar)?,
            content_en: required_text("content", command.content_en)?,
            rating,
            company: command.company,
            image_url: command.image_url,
            order,
        };

        Ok(self.repository.patch_testimonial(id, patch).await?)
    }

    async fn set_active(
        &self,
        kind: ContentKind,
        id: Uuid,
        active: bool,
    ) -> Result<(), RegisterContentError> {
        Ok(self.repository.set_active(kind, id, active).await?)
    }
}
