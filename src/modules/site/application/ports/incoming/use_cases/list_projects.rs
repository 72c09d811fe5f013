use async_trait::async_trait;

use super::ComposePageError;
use crate::modules::content::application::ports::outgoing::ProjectFilter;
use crate::modules::locale::application::domain::PageContext;
use crate::modules::site::application::domain::ProjectListing;

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    /// Category view over active projects, sliced to the visible count.
    async fn execute(
        &self,
        ctx: PageContext,
        filter: ProjectFilter,
    ) -> Result<ProjectListing, ComposePageError>;
}
