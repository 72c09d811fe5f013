// src/modules/catalog/application/ports/outgoing/message_catalog.rs

use crate::modules::locale::application::domain::Locale;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Key absent, not a leaf, or blank. Always a defect in the catalog files.
    #[error("Missing translation key '{key}' for locale '{locale}'")]
    MissingTranslationKey { locale: Locale, key: String },

    #[error("Invalid catalog for locale '{locale}': {message}")]
    InvalidCatalog { locale: Locale, message: String },
}

/// Static UI copy, addressed by dotted keys such as `FAQSection.faqs.pricing.question`.
pub trait MessageCatalog: Send + Sync {
    fn message(&self, locale: Locale, key: &str) -> Result<String, CatalogError>;

    /// Every leaf key of the locale tree, dotted and sorted.
    fn keys(&self, locale: Locale) -> Vec<String>;

    fn message_with(
        &self,
        locale: Locale,
        key: &str,
        args: &[(&str, &str)],
    ) -> Result<String, CatalogError> {
        self.message(locale, key)
            .map(|template| interpolate(&template, args))
    }
}

/// Replaces `{name}` placeholders. Unknown placeholders are left untouched.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_replaces_named_placeholders() {
        let out = interpolate("© {year} Fan. {year}", &[("year", "2025")]);
        assert_eq!(out, "© 2025 Fan. 2025");
    }

    #[test]
    fn interpolate_keeps_unknown_placeholders() {
        let out = interpolate("Hello {name}", &[("year", "2025")]);
        assert_eq!(out, "Hello {name}");
    }

    #[test]
    fn missing_key_error_names_locale_and_key() {
        let err = CatalogError::MissingTranslationKey {
            locale: Locale::Ar,
            key: "HomePage.nope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing translation key 'HomePage.nope' for locale 'ar'"
        );
    }
}
