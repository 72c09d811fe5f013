use std::sync::Arc;

use crate::modules::site::application::ports::incoming::use_cases::{
    ComposeHomePageUseCase, ComposeServicePageUseCase, ListProjectsUseCase,
};
use crate::modules::site::application::service::PageComposer;

#[derive(Clone)]
pub struct SiteUseCases {
    pub home: Arc<dyn ComposeHomePageUseCase + Send + Sync>,
    pub service_page: Arc<dyn ComposeServicePageUseCase + Send + Sync>,
    pub projects: Arc<dyn ListProjectsUseCase + Send + Sync>,
}

impl SiteUseCases {
    /// One composer backs every page.
    pub fn from_composer(composer: PageComposer) -> Self {
        let composer = Arc::new(composer);
        Self {
            home: composer.clone(),
            service_page: composer.clone(),
            projects: composer,
        }
    }
}
