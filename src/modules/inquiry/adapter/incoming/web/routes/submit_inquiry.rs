use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::ports::outgoing::MessageCatalog;
use crate::modules::inquiry::application::ports::incoming::use_cases::{
    SubmitInquiryCommand, SubmitInquiryError,
};
use crate::modules::locale::adapter::incoming::web::extractors::ResolvedLocale;
use crate::modules::locale::application::domain::Locale;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactInquiryRequest {
    #[schema(example = "Sara Alharbi")]
    pub name: String,

    #[schema(example = "+966 50 123 4567")]
    pub phone: String,

    /// Service key or slug. Empty means no preference.
    #[serde(default)]
    #[schema(example = "pergolas")]
    pub service: Option<String>,

    #[serde(default)]
    #[schema(example = "Pergola for a 5x4m garden")]
    pub message: Option<String>,
}

impl From<ContactInquiryRequest> for SubmitInquiryCommand {
    fn from(req: ContactInquiryRequest) -> Self {
        SubmitInquiryCommand {
            name: req.name,
            phone: req.phone,
            service: req.service,
            message: req.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InquiryAccepted {
    /// Localized acknowledgement for the visitor.
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Contact form submission
///
/// Validates the inquiry and forwards it to the business inbox. All messages in the
/// response are in the requested locale.
#[utoipa::path(
    post,
    path = "/{locale}/contact",
    tag = "contact",
    params(
        ("locale" = String, Path, description = "Site locale, `ar` or `en`", example = "en")
    ),
    request_body = ContactInquiryRequest,
    responses(
        (
            status = 202,
            description = "Inquiry forwarded",
            body = inline(SuccessResponse<InquiryAccepted>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Thank you, your request has been received. We will contact you soon."
                }
            })
        ),
        (
            status = 400,
            description = "Invalid field or malformed body",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INQUIRY_INVALID",
                    "message": "Please enter a valid phone number"
                }
            })
        ),
        (
            status = 404,
            description = "Unsupported locale",
            body = ErrorResponse
        ),
        (
            status = 502,
            description = "Mail transport unavailable",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INQUIRY_DELIVERY_FAILED",
                    "message": "We could not send your request right now, please call or message us on WhatsApp"
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
#[post("/{locale}/contact")]
pub async fn submit_inquiry_handler(
    locale: ResolvedLocale,
    payload: web::Json<ContactInquiryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let locale = locale.into_inner().locale;
    let catalog = data.catalog.as_ref();

    match data
        .submit_inquiry
        .execute(locale, payload.into_inner().into())
        .await
    {
        Ok(()) => localized(catalog, locale, "ContactSection.form.success", |message| {
            ApiResponse::accepted(InquiryAccepted { message })
        }),

        Err(SubmitInquiryError::Invalid(e)) => {
            info!("Inquiry rejected: {}", e);
            localized(catalog, locale, e.message_key(), |message| {
                ApiResponse::bad_request("INQUIRY_INVALID", &message)
            })
        }

        Err(SubmitInquiryError::DeliveryFailed(e)) => {
            error!("Inquiry delivery failed: {}", e);
            localized(catalog, locale, "ContactSection.errors.delivery", |message| {
                ApiResponse::bad_gateway("INQUIRY_DELIVERY_FAILED", &message)
            })
        }

        Err(SubmitInquiryError::MissingTranslation(e)) => {
            error!("Inquiry mail not rendered: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn localized(
    catalog: &(dyn MessageCatalog + Send + Sync),
    locale: Locale,
    key: &str,
    respond: impl FnOnce(String) -> HttpResponse,
) -> HttpResponse {
    match catalog.message(locale, key) {
        Ok(message) => respond(message),
        Err(e) => {
            error!("Inquiry response message unavailable: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::shared::api::custom_json_config;
    use async_trait::async_trait;

    use crate::modules::catalog::application::ports::outgoing::CatalogError;
    use crate::modules::inquiry::application::ports::incoming::use_cases::SubmitInquiryUseCase;
    use crate::tests::support::app_state_builder::{TestAppStateBuilder, TEST_INBOX};
    use crate::tests::support::stubs::RecordingEmailSender;

    struct MissingSubjectInquiry;

    #[async_trait]
    impl SubmitInquiryUseCase for MissingSubjectInquiry {
        async fn execute(
            &self,
            locale: Locale,
            _command: SubmitInquiryCommand,
        ) -> Result<(), SubmitInquiryError> {
            Err(SubmitInquiryError::MissingTranslation(
                CatalogError::MissingTranslationKey {
                    locale,
                    key: "ContactSection.email.subject".to_string(),
                },
            ))
        }
    }

    async fn post(uri: &str, body: Value, sender: RecordingEmailSender) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_email_sender(sender)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(submit_inquiry_handler),
        )
        .await;

        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_valid_inquiry_is_accepted_and_mailed() {
        let sender = RecordingEmailSender::default();
        let (status, body) = post(
            "/en/contact",
            json!({
                "name": "Sara",
                "phone": "+966 50 123 4567",
                "service": "carShades",
                "message": "Two parking bays"
            }),
            sender.clone(),
        )
        .await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["message"],
            "Thank you, your request has been received. We will contact you soon."
        );

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, TEST_INBOX);
        assert_eq!(sent[0].subject, "New quote request from Sara");
        assert!(sent[0].body.contains("+966501234567"));
        assert!(sent[0].body.contains("Car Shades"));
    }

    #[actix_web::test]
    async fn test_invalid_phone_is_localized_bad_request() {
        let sender = RecordingEmailSender::default();
        let (status, body) = post(
            "/ar/contact",
            json!({ "name": "سارة", "phone": "123" }),
            sender.clone(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INQUIRY_INVALID");
        assert_eq!(body["error"]["message"], "يرجى إدخال رقم جوال صحيح");
        assert!(sender.sent_emails().is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_service_is_bad_request() {
        let (status, body) = post(
            "/en/contact",
            json!({ "name": "Sara", "phone": "0501234567", "service": "boats" }),
            RecordingEmailSender::default(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please select one of the listed services");
    }

    #[actix_web::test]
    async fn test_mail_outage_is_bad_gateway() {
        let (status, body) = post(
            "/en/contact",
            json!({ "name": "Sara", "phone": "0501234567" }),
            RecordingEmailSender::failing("Connection refused"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "INQUIRY_DELIVERY_FAILED");
    }

    #[actix_web::test]
    async fn test_missing_required_field_is_validation_error() {
        let (status, body) = post(
            "/en/contact",
            json!({ "name": "Sara" }),
            RecordingEmailSender::default(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_unsupported_locale_is_not_found() {
        let (status, body) = post(
            "/fr/contact",
            json!({ "name": "Sara", "phone": "0501234567" }),
            RecordingEmailSender::default(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "LOCALE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_missing_translation_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_inquiry(MissingSubjectInquiry)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_inquiry_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/en/contact")
            .set_json(json!({ "name": "Sara", "phone": "0501234567" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
