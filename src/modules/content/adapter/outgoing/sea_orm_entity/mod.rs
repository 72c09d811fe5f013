pub mod company_info;
pub mod faqs;
pub mod hero_slides;
pub mod projects;
pub mod service_features;
pub mod services;
pub mod testimonials;

use sea_orm::{ActiveValue, Set};

/// Trims a set text column in place.
pub(crate) fn trim_set(value: &mut ActiveValue<String>) {
    if let ActiveValue::Set(v) = value {
        *value = Set(v.trim().to_string());
    }
}

/// Trims a set nullable text column, collapsing blanks to NULL.
pub(crate) fn trim_set_opt(value: &mut ActiveValue<Option<String>>) {
    if let ActiveValue::Set(v) = value {
        let trimmed = v
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        *value = Set(trimmed);
    }
}
