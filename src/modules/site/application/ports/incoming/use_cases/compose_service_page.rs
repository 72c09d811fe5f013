use async_trait::async_trait;

use super::ComposePageError;
use crate::modules::locale::application::domain::PageContext;
use crate::modules::site::application::domain::ServicePage;

#[async_trait]
pub trait ComposeServicePageUseCase: Send + Sync {
    /// Database service by slug first, then the catalog's default services.
    async fn execute(&self, ctx: PageContext, slug: &str) -> Result<ServicePage, ComposePageError>;
}
