// src/api/schemas.rs
//
// Documentation-only mirrors of the `ApiResponse` envelope written by
// `shared::api::response`.

use serde::Serialize;
use utoipa::ToSchema;

/// Envelope around every page document and accepted inquiry
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope for every failure, including unknown locales and paths
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `LOCALE_NOT_FOUND`, `SERVICE_NOT_FOUND`, `NOT_FOUND`,
    /// `VALIDATION_ERROR`, `INQUIRY_INVALID`, `INQUIRY_DELIVERY_FAILED`,
    /// `INTERNAL_ERROR`.
    #[schema(example = "SERVICE_NOT_FOUND")]
    pub code: String,

    /// Localized for the requested locale where one was resolved.
    #[schema(example = "The requested service could not be found")]
    pub message: String,
}
