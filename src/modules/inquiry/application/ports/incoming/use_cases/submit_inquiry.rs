use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::CatalogError;
use crate::modules::inquiry::application::domain::InquiryValidationError;
use crate::modules::locale::application::domain::Locale;

/// Raw contact form fields, validated by the service.
#[derive(Debug, Clone, Default)]
pub struct SubmitInquiryCommand {
    pub name: String,
    pub phone: String,
    pub service: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitInquiryError {
    #[error(transparent)]
    Invalid(#[from] InquiryValidationError),

    #[error("Inquiry delivery failed: {0}")]
    DeliveryFailed(String),

    #[error(transparent)]
    MissingTranslation(#[from] CatalogError),
}

#[async_trait]
pub trait SubmitInquiryUseCase: Send + Sync {
    /// Mail is written in the locale the form was submitted from.
    async fn execute(
        &self,
        locale: Locale,
        command: SubmitInquiryCommand,
    ) -> Result<(), SubmitInquiryError>;
}
