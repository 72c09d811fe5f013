use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use tracing::debug;

use crate::modules::locale::application::domain::PageContext;
use crate::modules::locale::application::resolver::resolve_page_context;
use crate::shared::api::ApiResponse;

/// Page context resolved from the `/{locale}/...` prefix of the request path.
///
/// Unsupported or missing locales short-circuit with a 404 before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLocale(pub PageContext);

impl ResolvedLocale {
    pub fn into_inner(self) -> PageContext {
        self.0
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for ResolvedLocale {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match resolve_page_context(req.path()) {
            Ok(ctx) => ready(Ok(ResolvedLocale(ctx))),
            Err(e) => {
                debug!("Rejecting {}: {}", req.path(), e);
                ready(Err(create_api_error(ApiResponse::not_found(
                    "LOCALE_NOT_FOUND",
                    "Page not found",
                ))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, HttpResponse, Responder};
    use serde_json::Value;

    #[get("/{locale}/probe")]
    async fn probe(locale: ResolvedLocale) -> impl Responder {
        let ctx = locale.into_inner();
        HttpResponse::Ok().json(serde_json::json!({
            "locale": ctx.locale,
            "dir": ctx.dir,
        }))
    }

    #[actix_web::test]
    async fn test_arabic_prefix_resolves_rtl() {
        let app = test::init_service(App::new().service(probe)).await;

        let req = test::TestRequest::get().uri("/ar/probe").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["locale"], "ar");
        assert_eq!(body["dir"], "rtl");
    }

    #[actix_web::test]
    async fn test_english_prefix_resolves_ltr() {
        let app = test::init_service(App::new().service(probe)).await;

        let req = test::TestRequest::get().uri("/en/probe").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["locale"], "en");
        assert_eq!(body["dir"], "ltr");
    }

    #[actix_web::test]
    async fn test_unsupported_prefix_is_not_found() {
        let app = test::init_service(App::new().service(probe)).await;

        let req = test::TestRequest::get().uri("/fr/probe").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "LOCALE_NOT_FOUND");
    }
}
