// src/modules/site/application/service/localized_content.rs

use crate::modules::catalog::application::ports::outgoing::{CatalogError, MessageCatalog};
use crate::modules::content::application::domain::Bilingual;
use crate::modules::locale::application::domain::Locale;

/// Single accessor for both kinds of copy: catalog keys and database records.
pub struct LocalizedContent<'a> {
    locale: Locale,
    catalog: &'a (dyn MessageCatalog + Send + Sync),
}

impl<'a> LocalizedContent<'a> {
    pub fn new(locale: Locale, catalog: &'a (dyn MessageCatalog + Send + Sync)) -> Self {
        Self { locale, catalog }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> Result<String, CatalogError> {
        self.catalog.message(self.locale, key)
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> Result<String, CatalogError> {
        self.catalog.message_with(self.locale, key, args)
    }

    pub fn text(&self, value: &Bilingual<String>) -> String {
        value.get(self.locale).clone()
    }

    /// Blank optional text is treated as absent.
    pub fn opt_text(&self, value: &Bilingual<Option<String>>) -> Option<String> {
        value
            .get(self.locale)
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::adapter::outgoing::JsonMessageCatalog;

    #[test]
    fn catalog_and_records_follow_the_same_locale() {
        let catalog = JsonMessageCatalog::embedded().unwrap();
        let ar = LocalizedContent::new(Locale::Ar, &catalog);
        let en = LocalizedContent::new(Locale::En, &catalog);

        assert_eq!(ar.t("navItems.home").unwrap(), "الرئيسية");
        assert_eq!(en.t("navItems.home").unwrap(), "Home");

        let title = Bilingual::text("مظلات", "Shades");
        assert_eq!(ar.text(&title), "مظلات");
        assert_eq!(en.text(&title), "Shades");
    }

    #[test]
    fn missing_key_is_an_error_not_blank() {
        let catalog = JsonMessageCatalog::embedded().unwrap();
        let en = LocalizedContent::new(Locale::En, &catalog);

        assert!(matches!(
            en.t("HomePage.doesNotExist"),
            Err(CatalogError::MissingTranslationKey { .. })
        ));
    }

    #[test]
    fn interpolates_named_arguments() {
        let catalog = JsonMessageCatalog::embedded().unwrap();
        let en = LocalizedContent::new(Locale::En, &catalog);

        let out = en.t_with("Footer.copyright", &[("year", "2025")]).unwrap();
        assert!(out.starts_with("© 2025"));
    }

    #[test]
    fn blank_optional_text_is_none() {
        let catalog = JsonMessageCatalog::embedded().unwrap();
        let ar = LocalizedContent::new(Locale::Ar, &catalog);

        let blank: Bilingual<Option<String>> = Bilingual::new(Some("  ".into()), Some("x".into()));
        assert_eq!(ar.opt_text(&blank), None);
        assert_eq!(
            LocalizedContent::new(Locale::En, &catalog).opt_text(&blank),
            Some("x".to_string())
        );
    }
}
