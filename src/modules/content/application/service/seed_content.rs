// src/modules/content/application/service/seed_content.rs

use std::sync::Arc;
use tracing::info;

use crate::modules::catalog::application::defaults::{
    DEFAULT_FAQS, DEFAULT_FEATURES, DEFAULT_SERVICES,
};
use crate::modules::catalog::application::ports::outgoing::{CatalogError, MessageCatalog};
use crate::modules::content::application::domain::Bilingual;
use crate::modules::content::application::ports::{
    incoming::use_cases::{
        BrowseContentError, BrowseContentUseCase, CreateServiceCommand, RegisterContentError,
        RegisterContentUseCase, UpsertCompanyInfoCommand,
    },
    outgoing::{NewFaq, NewServiceFeature},
};
use crate::modules::locale::application::domain::Locale;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Register(#[from] RegisterContentError),

    #[error(transparent)]
    Browse(#[from] BrowseContentError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

/// Loads the catalog's default services, features, FAQs and the business
/// contact facts into the content store. Safe to run on every start.
pub struct ContentSeeder {
    register: Arc<dyn RegisterContentUseCase + Send + Sync>,
    browse: Arc<dyn BrowseContentUseCase + Send + Sync>,
    catalog: Arc<dyn MessageCatalog + Send + Sync>,
}

impl ContentSeeder {
    pub fn new(
        register: Arc<dyn RegisterContentUseCase + Send + Sync>,
        browse: Arc<dyn BrowseContentUseCase + Send + Sync>,
        catalog: Arc<dyn MessageCatalog + Send + Sync>,
    ) -> Self {
        Self {
            register,
            browse,
            catalog,
        }
    }

    fn bilingual(&self, key: &str) -> Result<Bilingual<String>, CatalogError> {
        Ok(Bilingual::new(
            self.catalog.message(Locale::Ar, key)?,
            self.catalog.message(Locale::En, key)?,
        ))
    }

    pub async fn seed(
        &self,
        company_facts: Vec<UpsertCompanyInfoCommand>,
    ) -> Result<SeedReport, SeedError> {
        info!("Seeding default content...");
        let mut report = SeedReport::default();

        self.seed_services(&mut report).await?;
        self.seed_features(&mut report).await?;
        self.seed_faqs(&mut report).await?;

        for fact in company_facts {
            self.register.upsert_company_info(fact).await?;
            report.created += 1;
        }

        info!(
            "Seeding finished: {} written, {} skipped",
            report.created, report.skipped
        );
        Ok(report)
    }

    async fn seed_services(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for (position, (key, icon)) in DEFAULT_SERVICES.iter().enumerate() {
            let base = format!("ServicesSection.services.{key}");
            let command = CreateServiceCommand {
                slug: key.to_string(),
                title: self.bilingual(&format!("{base}.title"))?,
                description: self.bilingual(&format!("{base}.description"))?,
                short_description: Bilingual::new(None, None),
                icon_name: Some(icon.to_string()),
                image_url: None,
                order: position as i32 + 1,
                is_active: true,
            };

            match self.register.create_service(command).await {
                Ok(_) => report.created += 1,
                Err(RegisterContentError::SlugAlreadyExists) => report.skipped += 1,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    async fn seed_features(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        if !self.browse.service_features().await?.is_empty() {
            report.skipped += DEFAULT_FEATURES.len();
            return Ok(());
        }

        for (position, (key, icon)) in DEFAULT_FEATURES.iter().enumerate() {
            let base = format!("WhyUsSection.features.{key}");
            let description = self.bilingual(&format!("{base}.description"))?;
            self.register
                .create_service_feature(NewServiceFeature {
                    title: self.bilingual(&format!("{base}.title"))?,
                    description: description.map(Some),
                    icon_name: Some(icon.to_string()),
                    order: position as i32 + 1,
                    is_active: true,
                })
                .await?;
            report.created += 1;
        }
        Ok(())
    }

    async fn seed_faqs(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        if !self.browse.faqs().await?.is_empty() {
            report.skipped += DEFAULT_FAQS.len();
            return Ok(());
        }

        for (position, key) in DEFAULT_FAQS.iter().enumerate() {
            let base = format!("FAQSection.faqs.{key}");
            self.register
                .create_faq(NewFaq {
                    question: self.bilingual(&format!("{base}.question"))?,
                    answer: self.bilingual(&format!("{base}.answer"))?,
                    order: position as i32 + 1,
                    is_active: true,
                })
                .await?;
            report.created += 1;
        }
        Ok(())
    }
}
