use crate::modules::catalog::application::ports::outgoing::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposePageError {
    /// A catalog key used by the page is absent. Never rendered as blank.
    #[error(transparent)]
    MissingTranslation(#[from] CatalogError),

    #[error("Service not found: {0}")]
    ServiceNotFound(String),
}
