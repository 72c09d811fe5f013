// src/modules/content/application/domain/bilingual.rs

use serde::{Deserialize, Serialize};

use crate::modules::locale::application::domain::Locale;

/// One value per supported locale, stored as sibling `*_ar` / `*_en` columns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bilingual<T> {
    pub ar: T,
    pub en: T,
}

impl<T> Bilingual<T> {
    pub fn new(ar: T, en: T) -> Self {
        Self { ar, en }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Ar => &self.ar,
            Locale::En => &self.en,
        }
    }

    pub fn map<U>(self, f: impl Fn(T) -> U) -> Bilingual<U> {
        Bilingual {
            ar: f(self.ar),
            en: f(self.en),
        }
    }
}

impl Bilingual<String> {
    pub fn text(ar: &str, en: &str) -> Self {
        Self::new(ar.to_string(), en.to_string())
    }
}

/// Completeness rule for publishable text: present in both locales.
pub trait BilingualText {
    fn is_complete(&self) -> bool;
}

impl BilingualText for Bilingual<String> {
    fn is_complete(&self) -> bool {
        !self.ar.trim().is_empty() && !self.en.trim().is_empty()
    }
}

/// Optional pairs are complete when both sides are filled or both are absent.
impl BilingualText for Bilingual<Option<String>> {
    fn is_complete(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        let absent = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());

        (filled(&self.ar) && filled(&self.en)) || (absent(&self.ar) && absent(&self.en))
    }
}
