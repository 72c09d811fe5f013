use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::outgoing::ProjectFilter;
use crate::modules::locale::adapter::incoming::web::extractors::ResolvedLocale;
use crate::modules::site::application::domain::ProjectListing;
use crate::modules::site::application::ports::incoming::use_cases::ComposePageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectsQueryParams {
    /// Category key. `all` or empty lists every category.
    #[param(example = "carShades")]
    pub category: Option<String>,

    /// Only projects flagged as featured.
    #[serde(default)]
    pub featured: bool,
}

impl From<ProjectsQueryParams> for ProjectFilter {
    fn from(q: ProjectsQueryParams) -> Self {
        let category = q
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != "all");

        ProjectFilter {
            category,
            featured_only: q.featured,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Localized project listing
///
/// Active projects in display order, optionally narrowed to one category and/or featured
/// projects, sliced to the configured visible count.
#[utoipa::path(
    get,
    path = "/{locale}/projects",
    tag = "site",
    params(
        ("locale" = String, Path, description = "Site locale, `ar` or `en`", example = "en"),
        ProjectsQueryParams
    ),
    responses(
        (
            status = 200,
            description = "Project listing",
            body = inline(SuccessResponse<ProjectListing>),
            example = json!({
                "success": true,
                "data": {
                    "context": { "locale": "en", "lang": "en", "dir": "ltr" },
                    "alternate_path": "/ar/projects?category=carShades",
                    "title": "Our Projects",
                    "items": [],
                    "total": 0,
                    "has_more": false,
                    "empty_text": "New projects are coming soon"
                }
            })
        ),
        (
            status = 404,
            description = "Unsupported locale",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    )
)]
#[get("/{locale}/projects")]
pub async fn get_projects_handler(
    locale: ResolvedLocale,
    query: web::Query<ProjectsQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ctx = locale.into_inner();
    let filter: ProjectFilter = query.into_inner().into();

    match data.site.projects.execute(ctx, filter).await {
        Ok(listing) => ApiResponse::success(listing),

        Err(ComposePageError::MissingTranslation(e)) => {
            error!("Project listing for locale {} not rendered: {}", ctx.locale, e);
            ApiResponse::internal_error()
        }

        Err(ComposePageError::ServiceNotFound(slug)) => {
            error!("Project listing referenced unknown service {}", slug);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use async_trait::async_trait;

    use crate::modules::catalog::application::ports::outgoing::CatalogError;
    use crate::modules::locale::application::domain::PageContext;
    use crate::modules::site::application::ports::incoming::use_cases::ListProjectsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::content_fixtures::{project, InMemoryContentQuery};

    struct MissingKeyListing;

    #[async_trait]
    impl ListProjectsUseCase for MissingKeyListing {
        async fn execute(
            &self,
            ctx: PageContext,
            _filter: ProjectFilter,
        ) -> Result<ProjectListing, ComposePageError> {
            Err(ComposePageError::MissingTranslation(
                CatalogError::MissingTranslationKey {
                    locale: ctx.locale,
                    key: "ProjectsSection.title".to_string(),
                },
            ))
        }
    }

    fn gallery() -> InMemoryContentQuery {
        InMemoryContentQuery {
            projects: vec![
                project("school", Some("carShades"), false, 1, true),
                project("villa", Some("pergolas"), true, 2, true),
                project("hidden", Some("carShades"), true, 0, false),
            ],
            ..Default::default()
        }
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_content(gallery()).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn titles(body: &Value) -> Vec<String> {
        body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap().to_string())
            .collect()
    }

    #[actix_web::test]
    async fn test_all_category_means_no_filter() {
        let filter: ProjectFilter = ProjectsQueryParams {
            category: Some(" all ".to_string()),
            featured: false,
        }
        .into();
        assert_eq!(filter, ProjectFilter::default());
    }

    #[actix_web::test]
    async fn test_lists_every_active_project() {
        let (status, body) = get("/en/projects").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["school", "villa"]);
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["has_more"], false);
    }

    #[actix_web::test]
    async fn test_category_query_filters_listing() {
        let (status, body) = get("/ar/projects?category=carShades").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["مشروع school"]);
        assert_eq!(body["data"]["alternate_path"], "/en/projects?category=carShades");
    }

    #[actix_web::test]
    async fn test_featured_query_filters_listing() {
        let (status, body) = get("/en/projects?featured=true").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["villa"]);
    }

    #[actix_web::test]
    async fn test_unknown_category_is_empty_listing() {
        let (status, body) = get("/en/projects?category=boats").await;

        assert_eq!(status, StatusCode::OK);
        assert!(titles(&body).is_empty());
        assert_eq!(body["data"]["empty_text"], "New projects are coming soon");
    }

    #[actix_web::test]
    async fn test_visible_count_slices_listing() {
        let app_state = TestAppStateBuilder::default()
            .with_content(gallery())
            .with_visible_projects(1)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/en/projects").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(titles(&body), vec!["school"]);
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["has_more"], true);
    }

    #[actix_web::test]
    async fn test_missing_translation_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_projects(MissingKeyListing)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/ar/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
