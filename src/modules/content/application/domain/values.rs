// src/modules/content/application/domain/values.rs

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap());

static COMPANY_INFO_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

const SLUG_MAX_LEN: usize = 150;
const KEY_MAX_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentValidationError {
    #[error("Field '{0}' must be provided in both Arabic and English")]
    IncompleteTranslation(&'static str),

    #[error("Field '{0}' cannot be cleared")]
    RequiredField(&'static str),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Invalid company info key: {0}")]
    InvalidCompanyInfoKey(String),

    #[error("Rating must be between 0.0 and 5.0, got {0}")]
    RatingOutOfRange(f64),
}

//
// ──────────────────────────────────────────────────────────
// Slug
// ──────────────────────────────────────────────────────────
//

/// URL segment identifying a service (`carShades`). Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: &str) -> Result<Self, ContentValidationError> {
        let trimmed = raw.trim();

        if trimmed.len() > SLUG_MAX_LEN || !SLUG_REGEX.is_match(trimmed) {
            return Err(ContentValidationError::InvalidSlug(raw.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// CompanyInfoKey
// ──────────────────────────────────────────────────────────
//

/// Key of a `company_info` row, e.g. `phone`, `whatsapp`, `address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CompanyInfoKey(String);

impl CompanyInfoKey {
    pub const PHONE: &'static str = "phone";
    pub const WHATSAPP: &'static str = "whatsapp";
    pub const EMAIL: &'static str = "email";
    pub const ADDRESS: &'static str = "address";

    pub fn parse(raw: &str) -> Result<Self, ContentValidationError> {
        let trimmed = raw.trim();

        if trimmed.len() > KEY_MAX_LEN || !COMPANY_INFO_KEY_REGEX.is_match(trimmed) {
            return Err(ContentValidationError::InvalidCompanyInfoKey(
                raw.to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Rating
// ──────────────────────────────────────────────────────────
//

/// Testimonial rating in [0.0, 5.0] at one-decimal precision, held as tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX_TENTHS: u8 = 50;

    pub fn from_f64(value: f64) -> Result<Self, ContentValidationError> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(ContentValidationError::RatingOutOfRange(value));
        }

        Ok(Self((value * 10.0).round() as u8))
    }

    pub fn from_tenths(tenths: i16) -> Result<Self, ContentValidationError> {
        if !(0..=Self::MAX_TENTHS as i16).contains(&tenths) {
            return Err(ContentValidationError::RatingOutOfRange(
                f64::from(tenths) / 10.0,
            ));
        }

        Ok(Self(tenths as u8))
    }

    pub fn tenths(self) -> i16 {
        i16::from(self.0)
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX_TENTHS)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}
