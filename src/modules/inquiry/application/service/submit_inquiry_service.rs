use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::catalog::application::defaults::is_default_service;
use crate::modules::catalog::application::ports::outgoing::{CatalogError, MessageCatalog};
use crate::modules::content::application::ports::incoming::use_cases::BrowseContentUseCase;
use crate::modules::inquiry::application::domain::{ContactInquiry, InquiryValidationError};
use crate::modules::inquiry::application::ports::incoming::use_cases::{
    SubmitInquiryCommand, SubmitInquiryError, SubmitInquiryUseCase,
};
use crate::modules::inquiry::application::ports::outgoing::EmailSender;
use crate::modules::locale::application::domain::Locale;
use crate::modules::site::application::service::LocalizedContent;

/// Validates contact form submissions and mails them to the business inbox.
#[derive(Clone)]
pub struct SubmitInquiryService {
    browse: Arc<dyn BrowseContentUseCase + Send + Sync>,
    catalog: Arc<dyn MessageCatalog + Send + Sync>,
    sender: Arc<dyn EmailSender + Send + Sync>,
    recipient: String,
}

impl fmt::Debug for SubmitInquiryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitInquiryService")
            .field("sender", &"<dyn EmailSender>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl SubmitInquiryService {
    pub fn new(
        browse: Arc<dyn BrowseContentUseCase + Send + Sync>,
        catalog: Arc<dyn MessageCatalog + Send + Sync>,
        sender: Arc<dyn EmailSender + Send + Sync>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            browse,
            catalog,
            sender,
            recipient: recipient.into(),
        }
    }

    /// Display name of the requested service. Catalog keys first, then active database slugs.
    async fn service_label(
        &self,
        l: &LocalizedContent<'_>,
        key: &str,
    ) -> Result<String, SubmitInquiryError> {
        if is_default_service(key) {
            return Ok(l.t(&format!("ContactSection.form.services.{key}"))?);
        }

        match self.browse.service_by_slug(key).await {
            Ok(Some(service)) => Ok(l.text(&service.title)),
            Ok(None) => Err(InquiryValidationError::UnknownService(key.to_string()).into()),
            Err(e) => {
                warn!("Service lookup for inquiry failed, rejecting '{}': {}", key, e);
                Err(InquiryValidationError::UnknownService(key.to_string()).into())
            }
        }
    }
}

fn render_body(
    l: &LocalizedContent<'_>,
    inquiry: &ContactInquiry,
    service: Option<&str>,
) -> Result<String, CatalogError> {
    let mut body = format!(
        "{}: {}\n{}: {}\n",
        l.t("ContactSection.form.name")?,
        inquiry.name,
        l.t("ContactSection.form.phone")?,
        inquiry.phone,
    );

    if let Some(service) = service {
        body.push_str(&format!("{}: {}\n", l.t("ContactSection.form.service")?, service));
    }

    if let Some(message) = &inquiry.message {
        body.push_str(&format!("\n{}:\n{}\n", l.t("ContactSection.form.message")?, message));
    }

    Ok(body)
}

#[async_trait]
impl SubmitInquiryUseCase for SubmitInquiryService {
    async fn execute(
        &self,
        locale: Locale,
        command: SubmitInquiryCommand,
    ) -> Result<(), SubmitInquiryError> {
        let inquiry = ContactInquiry::parse(
            &command.name,
            &command.phone,
            command.service.as_deref(),
            command.message.as_deref(),
        )?;

        let l = LocalizedContent::new(locale, self.catalog.as_ref());

        let service = match inquiry.service.as_deref() {
            Some(key) => Some(self.service_label(&l, key).await?),
            None => None,
        };

        let subject = l.t_with("ContactSection.email.subject", &[("name", &inquiry.name)])?;
        let body = render_body(&l, &inquiry, service.as_deref())?;

        self.sender
            .send_email(&self.recipient, &subject, &body)
            .await
            .map_err(SubmitInquiryError::DeliveryFailed)?;

        info!(
            "Contact inquiry delivered locale={} service={}",
            locale,
            inquiry.service.as_deref().unwrap_or("-")
        );
        Ok(())
    }
}
