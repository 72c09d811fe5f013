// src/modules/content/adapter/outgoing/content_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::row_mapping;
use super::sea_orm_entity::{
    company_info, faqs, hero_slides, projects, service_features, services, testimonials,
};
use crate::modules::content::application::domain::{
    CompanyInfo, ContentKind, Faq, HeroSlide, Project, Service, ServiceFeature, Testimonial,
};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError, NewCompanyInfo, NewFaq, NewHeroSlide, NewProject,
    NewService, NewServiceFeature, NewTestimonial, PatchField, TestimonialPatch,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn toggle<E>(
        &self,
        id_col: E::Column,
        active_col: E::Column,
        updated_col: E::Column,
        id: Uuid,
        active: bool,
    ) -> Result<(), ContentRepositoryError>
    where
        E: EntityTrait,
    {
        let result = E::update_many()
            .col_expr(active_col, Expr::value(active))
            .col_expr(updated_col, Expr::value(Utc::now().fixed_offset()))
            .filter(id_col.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn create_hero_slide(
        &self,
        data: NewHeroSlide,
    ) -> Result<HeroSlide, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = hero_slides::ActiveModel {
            id: Set(Uuid::new_v4()),
            title_ar: Set(data.title.ar),
            title_en: Set(data.title.en),
            subtitle_ar: Set(data.subtitle.ar),
            subtitle_en: Set(data.subtitle.en),
            youtube_url: Set(data.youtube_url),
            image_url: Set(data.image_url),
            cta_text_ar: Set(data.cta_text.ar),
            cta_text_en: Set(data.cta_text.en),
            cta_link: Set(data.cta_link),
            order: Set(data.order),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(row_mapping::hero_slide(result))
    }

    async fn create_service(&self, data: NewService) -> Result<Service, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = services::ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(data.slug.into_inner()),
            title_ar: Set(data.title.ar),
            title_en: Set(data.title.en),
            description_ar: Set(data.description.ar),
            description_en: Set(data.description.en),
            short_description_ar: Set(data.short_description.ar),
            short_description_en: Set(data.short_description.en),
            icon_name: Set(data.icon_name),
            image_url: Set(data.image_url),
            order: Set(data.order),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&*self.db)
            .await
            .map_err(|e| {
                map_unique_err(e, SERVICES_SLUG_INDEX, ContentRepositoryError::SlugAlreadyExists)
            })?;

        row_mapping::service(result).map_err(ContentRepositoryError::DatabaseError)
    }

    async fn create_project(&self, data: NewProject) -> Result<Project, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = projects::ActiveModel {
            id: Set(Uuid::new_v4()),
            title_ar: Set(data.title.ar),
            title_en: Set(data.title.en),
            description_ar: Set(data.description.ar),
            description_en: Set(data.description.en),
            image_urls: Set(row_mapping::image_urls_to_json(&data.image_urls)),
            category: Set(data.category),
            location: Set(data.location),
            year: Set(data.year),
            is_featured: Set(data.is_featured),
            order: Set(data.order),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        row_mapping::project(result).map_err(ContentRepositoryError::DatabaseError)
    }

    async fn create_testimonial(
        &self,
        data: NewTestimonial,
    ) -> Result<Testimonial, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = testimonials::ActiveModel {
            id: Set(Uuid::new_v4()),
            name_ar: Set(data.name.ar),
            name_en: Set(data.name.en),
            content_ar: Set(data.content.ar),
            content_en: Set(data.content.en),
            rating: Set(data.rating.tenths()),
            company: Set(data.company),
            image_url: Set(data.image_url),
            order: Set(data.order),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        row_mapping::testimonial(result).map_err(ContentRepositoryError::DatabaseError)
    }

    async fn create_faq(&self, data: NewFaq) -> Result<Faq, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = faqs::ActiveModel {
            id: Set(Uuid::new_v4()),
            question_ar: Set(data.question.ar),
            question_en: Set(data.question.en),
            answer_ar: Set(data.answer.ar),
            answer_en: Set(data.answer.en),
            order: Set(data.order),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(row_mapping::faq(result))
    }

    async fn create_service_feature(
        &self,
        data: NewServiceFeature,
    ) -> Result<ServiceFeature, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = service_features::ActiveModel {
            id: Set(Uuid::new_v4()),
            title_ar: Set(data.title.ar),
            title_en: Set(data.title.en),
            description_ar: Set(data.description.ar),
            description_en: Set(data.description.en),
            icon_name: Set(data.icon_name),
            order: Set(data.order),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(row_mapping::service_feature(result))
    }

    async fn create_company_info(
        &self,
        data: NewCompanyInfo,
    ) -> Result<CompanyInfo, ContentRepositoryError> {
        let result = company_info_model(data)
            .insert(&*self.db)
            .await
            .map_err(|e| {
                map_unique_err(e, COMPANY_INFO_KEY_INDEX, ContentRepositoryError::KeyAlreadyExists)
            })?;

        row_mapping::company_info(result).map_err(ContentRepositoryError::DatabaseError)
    }

    async fn upsert_company_info(
        &self,
        data: NewCompanyInfo,
    ) -> Result<CompanyInfo, ContentRepositoryError> {
        use company_info::{Column, Entity};

        // Single statement so concurrent writers cannot both insert the key.
        let result = Entity::insert(company_info_model(data))
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::ValueAr, Column::ValueEn, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        row_mapping::company_info(result).map_err(ContentRepositoryError::DatabaseError)
    }

    async fn patch_testimonial(
        &self,
        id: Uuid,
        patch: TestimonialPatch,
    ) -> Result<Testimonial, ContentRepositoryError> {
        use testimonials::{ActiveModel, Column, Entity};

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(v) = patch.name_ar {
            model.name_ar = Set(v.trim().to_string());
        }
        if let PatchField::Value(v) = patch.name_en {
            model.name_en = Set(v.trim().to_string());
        }
        if let PatchField::Value(v) = patch.content_ar {
            model.content_ar = Set(v.trim().to_string());
        }
        if let PatchField::Value(v) = patch.content_en {
            model.content_en = Set(v.trim().to_string());
        }
        if let PatchField::Value(rating) = patch.rating {
            model.rating = Set(rating.tenths());
        }
        if let PatchField::Value(order) = patch.order {
            model.order = Set(order);
        }

        match patch.company {
            PatchField::Unset => {}
            PatchField::Null => model.company = Set(None),
            PatchField::Value(v) => model.company = Set(Some(v)),
        }

        match patch.image_url {
            PatchField::Unset => {}
            PatchField::Null => model.image_url = Set(None),
            PatchField::Value(v) => model.image_url = Set(Some(v)),
        }

        let has_changes = model.name_ar.is_set()
            || model.name_en.is_set()
            || model.content_ar.is_set()
            || model.content_en.is_set()
            || model.rating.is_set()
            || model.order.is_set()
            || model.company.is_set()
            || model.image_url.is_set();

        if !has_changes {
            let result = Entity::find_by_id(id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ContentRepositoryError::NotFound)?;

            return row_mapping::testimonial(result).map_err(ContentRepositoryError::DatabaseError);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ContentRepositoryError::NotFound)?;

        row_mapping::testimonial(result).map_err(ContentRepositoryError::DatabaseError)
    }

    async fn set_active(
        &self,
        kind: ContentKind,
        id: Uuid,
        active: bool,
    ) -> Result<(), ContentRepositoryError> {
        match kind {
            ContentKind::HeroSlide => {
                use hero_slides::{Column, Entity};
                self.toggle::<Entity>(Column::Id, Column::IsActive, Column::UpdatedAt, id, active)
                    .await
            }
            ContentKind::Service => {
                use services::{Column, Entity};
                self.toggle::<Entity>(Column::Id, Column::IsActive, Column::UpdatedAt, id, active)
                    .await
            }
            ContentKind::Project => {
                use projects::{Column, Entity};
                self.toggle::<Entity>(Column::Id, Column::IsActive, Column::UpdatedAt, id, active)
                    .await
            }
            ContentKind::Testimonial => {
                use testimonials::{Column, Entity};
                self.toggle::<Entity>(Column::Id, Column::IsActive, Column::UpdatedAt, id, active)
                    .await
            }
            ContentKind::Faq => {
                use faqs::{Column, Entity};
                self.toggle::<Entity>(Column::Id, Column::IsActive, Column::UpdatedAt, id, active)
                    .await
            }
            ContentKind::ServiceFeature => {
                use service_features::{Column, Entity};
                self.toggle::<Entity>(Column::Id, Column::IsActive, Column::UpdatedAt, id, active)
                    .await
            }
            ContentKind::CompanyInfo => {
                use company_info::{Column, Entity};
                self.toggle::<Entity>(Column::Id, Column::IsActive, Column::UpdatedAt, id, active)
                    .await
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn company_info_model(data: NewCompanyInfo) -> company_info::ActiveModel {
    let now = Utc::now().fixed_offset();

    company_info::ActiveModel {
        id: Set(Uuid::new_v4()),
        key: Set(data.key.as_str().to_string()),
        value_ar: Set(data.value.ar),
        value_en: Set(data.value.en),
        order: Set(0),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

// Unique indexes created by the migration crate.
const SERVICES_SLUG_INDEX: &str = "idx_services_slug_unique";
const COMPANY_INFO_KEY_INDEX: &str = "idx_company_info_key_unique";

/// Maps a violation of the unique index `index` to `conflict`, anything else to `DatabaseError`.
fn map_unique_err(
    e: DbErr,
    index: &str,
    conflict: ContentRepositoryError,
) -> ContentRepositoryError {
    let msg = e.to_string();

    if msg.contains(&format!("\"{index}\"")) {
        conflict
    } else {
        ContentRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
