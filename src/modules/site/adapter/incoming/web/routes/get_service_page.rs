use actix_web::{get, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::ports::outgoing::MessageCatalog;
use crate::modules::locale::adapter::incoming::web::extractors::ResolvedLocale;
use crate::modules::site::application::domain::ServicePage;
use crate::modules::site::application::ports::incoming::use_cases::ComposePageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Localized service page
///
/// Resolves the slug against active database services first, then the catalog's default
/// services. Slugs are matched case-sensitively.
#[utoipa::path(
    get,
    path = "/{locale}/services/{slug}",
    tag = "site",
    params(
        ("locale" = String, Path, description = "Site locale, `ar` or `en`", example = "ar"),
        ("slug" = String, Path, description = "Service slug", example = "carShades")
    ),
    responses(
        (
            status = 200,
            description = "Service page document",
            body = inline(SuccessResponse<ServicePage>),
            example = json!({
                "success": true,
                "data": {
                    "context": { "locale": "ar", "lang": "ar", "dir": "rtl" },
                    "alternate_path": "/en/services/carShades",
                    "service": {
                        "slug": "carShades",
                        "title": "مظلات السيارات"
                    }
                }
            })
        ),
        (
            status = 404,
            description = "Unsupported locale or unknown service",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SERVICE_NOT_FOUND",
                    "message": "The requested service could not be found"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    )
)]
#[get("/{locale}/services/{slug}")]
pub async fn get_service_page_handler(
    locale: ResolvedLocale,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ctx = locale.into_inner();
    let (_, slug) = path.into_inner();

    match data.site.service_page.execute(ctx, &slug).await {
        Ok(page) => ApiResponse::success(page),

        Err(ComposePageError::ServiceNotFound(slug)) => {
            info!("No service page for slug={} locale={}", slug, ctx.locale);
            match data.catalog.message(ctx.locale, "NotFound.service") {
                Ok(message) => ApiResponse::not_found("SERVICE_NOT_FOUND", &message),
                Err(e) => {
                    error!("Service not-found message unavailable: {}", e);
                    ApiResponse::internal_error()
                }
            }
        }

        Err(ComposePageError::MissingTranslation(e)) => {
            error!(
                "Service page slug={} locale={} not rendered: {}",
                slug, ctx.locale, e
            );
            ApiResponse::internal_error()
        }
    }
}
