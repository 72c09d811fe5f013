use actix_web::web;
use std::sync::Arc;

use crate::modules::catalog::adapter::outgoing::JsonMessageCatalog;
use crate::modules::catalog::application::ports::outgoing::MessageCatalog;
use crate::modules::content::application::service::BrowseContentService;
use crate::modules::inquiry::application::ports::incoming::use_cases::SubmitInquiryUseCase;
use crate::modules::inquiry::application::ports::outgoing::EmailSender;
use crate::modules::inquiry::application::service::SubmitInquiryService;
use crate::modules::site::application::domain::BusinessProfile;
use crate::modules::site::application::ports::incoming::use_cases::{
    ComposeHomePageUseCase, ComposeServicePageUseCase, ListProjectsUseCase,
};
use crate::modules::site::application::service::PageComposer;
use crate::modules::site::application::SiteUseCases;
use crate::tests::support::content_fixtures::InMemoryContentQuery;
use crate::tests::support::stubs::RecordingEmailSender;
use crate::AppState;

pub const TEST_INBOX: &str = "info@fan-almizallat.com";

/// Real composer and inquiry service over in-memory content unless a use case is swapped out.
pub struct TestAppStateBuilder {
    content: InMemoryContentQuery,
    catalog: Arc<dyn MessageCatalog + Send + Sync>,
    profile: BusinessProfile,
    visible_projects: usize,
    email_sender: Arc<dyn EmailSender + Send + Sync>,
    home: Option<Arc<dyn ComposeHomePageUseCase + Send + Sync>>,
    service_page: Option<Arc<dyn ComposeServicePageUseCase + Send + Sync>>,
    projects: Option<Arc<dyn ListProjectsUseCase + Send + Sync>>,
    submit_inquiry: Option<Arc<dyn SubmitInquiryUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: InMemoryContentQuery::default(),
            catalog: Arc::new(JsonMessageCatalog::embedded().unwrap()),
            profile: BusinessProfile::default(),
            visible_projects: 6,
            email_sender: Arc::new(RecordingEmailSender::default()),
            home: None,
            service_page: None,
            projects: None,
            submit_inquiry: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: InMemoryContentQuery) -> Self {
        self.content = content;
        self
    }

    pub fn with_visible_projects(mut self, count: usize) -> Self {
        self.visible_projects = count;
        self
    }

    pub fn with_email_sender(mut self, sender: impl EmailSender + 'static) -> Self {
        self.email_sender = Arc::new(sender);
        self
    }

    pub fn with_home_page(mut self, uc: impl ComposeHomePageUseCase + 'static) -> Self {
        self.home = Some(Arc::new(uc));
        self
    }

    pub fn with_service_page(mut self, uc: impl ComposeServicePageUseCase + 'static) -> Self {
        self.service_page = Some(Arc::new(uc));
        self
    }

    pub fn with_projects(mut self, uc: impl ListProjectsUseCase + 'static) -> Self {
        self.projects = Some(Arc::new(uc));
        self
    }

    pub fn with_submit_inquiry(mut self, uc: impl SubmitInquiryUseCase + 'static) -> Self {
        self.submit_inquiry = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let browse = Arc::new(BrowseContentService::new(self.content));

        let composer = PageComposer::new(
            browse.clone(),
            Arc::clone(&self.catalog),
            self.profile,
            self.visible_projects,
        );
        let mut site = SiteUseCases::from_composer(composer);
        if let Some(home) = self.home {
            site.home = home;
        }
        if let Some(service_page) = self.service_page {
            site.service_page = service_page;
        }
        if let Some(projects) = self.projects {
            site.projects = projects;
        }

        let submit_inquiry: Arc<dyn SubmitInquiryUseCase + Send + Sync> = match self.submit_inquiry {
            Some(uc) => uc,
            None => Arc::new(SubmitInquiryService::new(
                browse,
                Arc::clone(&self.catalog),
                self.email_sender,
                TEST_INBOX,
            )),
        };

        web::Data::new(AppState {
            site,
            submit_inquiry,
            catalog: self.catalog,
        })
    }
}
