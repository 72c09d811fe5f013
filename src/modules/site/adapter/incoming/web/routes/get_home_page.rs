use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::locale::adapter::incoming::web::extractors::ResolvedLocale;
use crate::modules::site::application::domain::HomePage;
use crate::modules::site::application::ports::incoming::use_cases::ComposePageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Localized home page
///
/// Returns the eight home sections in display order, with metadata, navigation and footer
/// resolved for the requested locale.
#[utoipa::path(
    get,
    path = "/{locale}",
    tag = "site",
    params(
        ("locale" = String, Path, description = "Site locale, `ar` or `en`", example = "ar")
    ),
    responses(
        (
            status = 200,
            description = "Home page document",
            body = inline(SuccessResponse<HomePage>),
            example = json!({
                "success": true,
                "data": {
                    "context": { "locale": "ar", "lang": "ar", "dir": "rtl" },
                    "alternate_path": "/en",
                    "sections": [
                        { "kind": "hero" },
                        { "kind": "about" }
                    ]
                }
            })
        ),
        (
            status = 404,
            description = "Unsupported locale",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "LOCALE_NOT_FOUND", "message": "Page not found" }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INTERNAL_ERROR", "message": "An unexpected error occurred" }
            })
        )
    )
)]
#[get("/{locale}")]
pub async fn get_home_page_handler(
    locale: ResolvedLocale,
    data: web::Data<AppState>,
) -> impl Responder {
    let ctx = locale.into_inner();

    match data.site.home.execute(ctx).await {
        Ok(page) => ApiResponse::success(page),

        Err(ComposePageError::MissingTranslation(e)) => {
            error!("Home page for locale {} not rendered: {}", ctx.locale, e);
            ApiResponse::internal_error()
        }

        Err(ComposePageError::ServiceNotFound(slug)) => {
            error!("Home page lookup referenced unknown service {}", slug);
            ApiResponse::internal_error()
        }
    }
}
