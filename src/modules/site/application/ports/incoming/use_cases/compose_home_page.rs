use async_trait::async_trait;

use super::ComposePageError;
use crate::modules::locale::application::domain::PageContext;
use crate::modules::site::application::domain::HomePage;

#[async_trait]
pub trait ComposeHomePageUseCase: Send + Sync {
    async fn execute(&self, ctx: PageContext) -> Result<HomePage, ComposePageError>;
}
