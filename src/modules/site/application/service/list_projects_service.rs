use async_trait::async_trait;
use url::form_urlencoded;

use super::page_composer::{or_empty, PageComposer};
use crate::modules::content::application::ports::outgoing::ProjectFilter;
use crate::modules::locale::application::domain::PageContext;
use crate::modules::site::application::domain::{PageHead, ProjectListing};
use crate::modules::site::application::ports::incoming::use_cases::{
    ComposePageError, ListProjectsUseCase,
};

#[async_trait]
impl ListProjectsUseCase for PageComposer {
    async fn execute(
        &self,
        ctx: PageContext,
        filter: ProjectFilter,
    ) -> Result<ProjectListing, ComposePageError> {
        let rows = or_empty("projects", self.browse.projects(&filter).await);
        let total = rows.len();

        let l = self.localized(ctx.locale);
        let items = rows
            .into_iter()
            .take(self.visible_projects)
            .map(|p| self.project_card(&l, p))
            .collect::<Result<Vec<_>, _>>()?;

        let empty_text = if items.is_empty() {
            Some(l.t("ProjectsSection.empty")?)
        } else {
            None
        };

        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = &filter.category {
            query.append_pair("category", category);
        }
        if filter.featured_only {
            query.append_pair("featured", "true");
        }
        let query = query.finish();
        let alternate_path = if query.is_empty() {
            ctx.alternate_path("projects")
        } else {
            format!("{}?{query}", ctx.alternate_path("projects"))
        };

        let title = l.t("ProjectsSection.title")?;
        let description = l.t("ProjectsSection.subtitle")?;

        Ok(ProjectListing {
            metadata: self.metadata(
                &ctx,
                PageHead {
                    path: "/projects",
                    title: Some(&title),
                    description: Some(&description),
                },
            ),
            categories: self.category_tabs(&ctx, &l, filter.category.as_deref())?,
            has_more: total > items.len(),
            items,
            total,
            empty_text,
            title,
            alternate_path,
            context: ctx,
        })
    }
}
