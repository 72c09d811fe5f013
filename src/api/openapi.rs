use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::health::{HealthResponse, ReadinessResponse};
use crate::modules::inquiry::adapter::incoming::web::routes::{
    ContactInquiryRequest, InquiryAccepted,
};
use crate::modules::site::application::domain::{HomePage, ProjectListing, ServicePage};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fan Almizallat Site API",
        version = "1.0.0",
        description = "Bilingual (Arabic/English) page documents and contact inquiries for the Fan Almizallat shading company site",
        contact(
            name = "Fan Almizallat",
            email = "info@fan-almizallat.com"
        )
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Site pages
        crate::modules::site::adapter::incoming::web::routes::get_home_page_handler,
        crate::modules::site::adapter::incoming::web::routes::get_service_page_handler,
        crate::modules::site::adapter::incoming::web::routes::get_projects_handler,

        // Contact
        crate::modules::inquiry::adapter::incoming::web::routes::submit_inquiry_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<HomePage>,
            ErrorResponse,
            ErrorDetail,

            // Page documents
            HomePage,
            ServicePage,
            ProjectListing,

            // Contact DTOs
            ContactInquiryRequest,
            InquiryAccepted,

            HealthResponse,
            ReadinessResponse
        )
    ),
    tags(
        (name = "site", description = "Localized page documents"),
        (name = "contact", description = "Contact form inquiries"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
