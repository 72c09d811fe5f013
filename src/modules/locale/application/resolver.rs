// src/modules/locale/application/resolver.rs

use crate::modules::locale::application::domain::locale::{Locale, PageContext};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleResolutionError {
    /// Path has no leading locale segment.
    #[error("Locale segment missing")]
    MissingLocale,

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// Extracts and validates the locale prefix of a request path.
///
/// `/ar/...` -> `ar`, `/en` -> `en`, anything else is an error and must
/// render as NotFound.
pub fn resolve_locale(path: &str) -> Result<Locale, LocaleResolutionError> {
    let path = path.strip_prefix('/').unwrap_or(path);

    let segment = path
        .split(&['/', '?', '#'][..])
        .next()
        .unwrap_or_default();

    if segment.is_empty() {
        return Err(LocaleResolutionError::MissingLocale);
    }

    Locale::from_code(segment)
        .ok_or_else(|| LocaleResolutionError::UnsupportedLocale(segment.to_string()))
}

pub fn resolve_page_context(path: &str) -> Result<PageContext, LocaleResolutionError> {
    resolve_locale(path).map(PageContext::new)
}
