use async_trait::async_trait;

use crate::modules::content::application::domain::{
    arrange_visible, CompanyInfo, Faq, HeroSlide, Listed, Project, Service, ServiceFeature,
    Testimonial,
};
use crate::modules::content::application::ports::{
    incoming::use_cases::{BrowseContentError, BrowseContentUseCase},
    outgoing::{ContentQuery, ProjectFilter},
};

#[derive(Debug, Clone)]
pub struct BrowseContentService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> BrowseContentService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> BrowseContentUseCase for BrowseContentService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn hero_slides(&self) -> Result<Vec<HeroSlide>, BrowseContentError> {
        Ok(arrange_visible(self.query.active_hero_slides().await?))
    }

    async fn services(&self) -> Result<Vec<Service>, BrowseContentError> {
        Ok(arrange_visible(self.query.active_services().await?))
    }

    async fn service_by_slug(&self, slug: &str) -> Result<Option<Service>, BrowseContentError> {
        let found = self.query.active_service_by_slug(slug).await?;
        Ok(found.filter(|s| s.meta.is_active && s.is_publishable()))
    }

    async fn projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, BrowseContentError> {
        let rows = self.query.active_projects(filter).await?;

        // category and featured are equality filters applied before ordering
        let rows = rows
            .into_iter()
            .filter(|p| match &filter.category {
                Some(c) => p.category.as_deref() == Some(c.as_str()),
                None => true,
            })
            .filter(|p| !filter.featured_only || p.is_featured)
            .collect();

        Ok(arrange_visible(rows))
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, BrowseContentError> {
        Ok(arrange_visible(self.query.active_testimonials().await?))
    }

    async fn faqs(&self) -> Result<Vec<Faq>, BrowseContentError> {
        Ok(arrange_visible(self.query.active_faqs().await?))
    }

    async fn service_features(&self) -> Result<Vec<ServiceFeature>, BrowseContentError> {
        Ok(arrange_visible(self.query.active_service_features().await?))
    }

    async fn company_info(&self) -> Result<Vec<CompanyInfo>, BrowseContentError> {
        Ok(arrange_visible(self.query.active_company_info().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::{
        faq, project, service, InMemoryContentQuery,
    };

    #[tokio::test]
    async fn faqs_render_active_in_order() {
        let query = InMemoryContentQuery {
            faqs: vec![
                faq("pricing", 3, true),
                faq("guarantee", 1, true),
                faq("hidden", 2, false),
            ],
            ..Default::default()
        };
        let service = BrowseContentService::new(query);

        let faqs = service.faqs().await.unwrap();
        let keys: Vec<_> = faqs.iter().map(|f| f.question.en.as_str()).collect();

        assert_eq!(keys, vec!["guarantee", "pricing"]);
    }

    #[tokio::test]
    async fn inactive_service_slug_is_not_found() {
        let query = InMemoryContentQuery {
            services: vec![service("carShades", 1, false), service("screens", 2, true)],
            ..Default::default()
        };
        let browse = BrowseContentService::new(query);

        assert!(browse.service_by_slug("carShades").await.unwrap().is_none());
        assert!(browse.service_by_slug("screens").await.unwrap().is_some());
        assert!(browse.service_by_slug("unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn project_category_filter_applies_before_ordering() {
        let query = InMemoryContentQuery {
            projects: vec![
                project("Villa", Some("screens"), false, 2, true),
                project("Mall", Some("carShades"), true, 3, true),
                project("School", Some("carShades"), false, 1, true),
                project("Hidden", Some("carShades"), true, 0, false),
            ],
            ..Default::default()
        };
        let browse = BrowseContentService::new(query);

        let filter = ProjectFilter {
            category: Some("carShades".to_string()),
            featured_only: false,
        };
        let titles: Vec<_> = browse
            .projects(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title.en)
            .collect();
        assert_eq!(titles, vec!["School", "Mall"]);

        let featured = ProjectFilter {
            category: None,
            featured_only: true,
        };
        let titles: Vec<_> = browse
            .projects(&featured)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title.en)
            .collect();
        assert_eq!(titles, vec!["Mall"]);
    }

    #[tokio::test]
    async fn query_failure_is_mapped() {
        let browse = BrowseContentService::new(InMemoryContentQuery::failing());

        match browse.faqs().await {
            Err(BrowseContentError::QueryFailed(msg)) => assert!(msg.contains("connection")),
            other => panic!("Expected QueryFailed, got {:?}", other),
        }
    }
}
