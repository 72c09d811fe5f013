// src/modules/catalog/application/defaults.rs
//
// Fixed key lists used when the content store has nothing to show for a
// section. Keys point into the message catalog.

/// `(key, icon)` under `ServicesSection.services.<key>`. The key doubles as slug.
pub const DEFAULT_SERVICES: [(&str, &str); 4] = [
    ("carShades", "Car"),
    ("screens", "Shield"),
    ("pergolas", "Home"),
    ("hangars", "Building2"),
];

/// `(key, icon)` under `WhyUsSection.features.<key>`.
pub const DEFAULT_FEATURES: [(&str, &str); 4] = [
    ("materials", "Shield"),
    ("supervision", "Users"),
    ("speed", "Clock"),
    ("pricing", "Wallet"),
];

/// Keys under `FAQSection.faqs.<key>`.
pub const DEFAULT_FAQS: [&str; 4] = ["difference", "guarantee", "fabricVsSheets", "pricing"];

/// Project category tabs, `all` first.
pub const PROJECT_CATEGORIES: [&str; 5] = ["all", "carShades", "screens", "pergolas", "hangars"];

/// `(value, catalog label key)` for the about-section counters.
pub const ABOUT_STATS: [(&str, &str); 3] = [
    ("+500", "AboutSection.stats.projects"),
    ("10+", "AboutSection.stats.years"),
    ("100%", "AboutSection.stats.satisfaction"),
];

pub fn is_default_service(key: &str) -> bool {
    DEFAULT_SERVICES.iter().any(|(k, _)| *k == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::adapter::outgoing::JsonMessageCatalog;
    use crate::modules::catalog::application::ports::outgoing::MessageCatalog;
    use crate::modules::locale::application::domain::Locale;

    #[test]
    fn every_default_key_is_translated() {
        let catalog = JsonMessageCatalog::embedded().unwrap();

        for locale in Locale::ALL {
            for (key, _) in DEFAULT_SERVICES {
                for field in ["title", "description"] {
                    let k = format!("ServicesSection.services.{key}.{field}");
                    assert!(catalog.message(locale, &k).is_ok(), "{locale}:{k}");
                }
                let k = format!("ContactSection.form.services.{key}");
                assert!(catalog.message(locale, &k).is_ok(), "{locale}:{k}");
            }
            for (key, _) in DEFAULT_FEATURES {
                for field in ["title", "description"] {
                    let k = format!("WhyUsSection.features.{key}.{field}");
                    assert!(catalog.message(locale, &k).is_ok(), "{locale}:{k}");
                }
            }
            for key in DEFAULT_FAQS {
                for field in ["question", "answer"] {
                    let k = format!("FAQSection.faqs.{key}.{field}");
                    assert!(catalog.message(locale, &k).is_ok(), "{locale}:{k}");
                }
            }
            for key in PROJECT_CATEGORIES {
                let k = format!("ProjectsSection.categories.{key}");
                assert!(catalog.message(locale, &k).is_ok(), "{locale}:{k}");
            }
            for (_, k) in ABOUT_STATS {
                assert!(catalog.message(locale, k).is_ok(), "{locale}:{k}");
            }
        }
    }

    #[test]
    fn default_service_lookup() {
        assert!(is_default_service("carShades"));
        assert!(!is_default_service("CarShades"));
        assert!(!is_default_service("all"));
    }
}
