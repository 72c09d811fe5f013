// src/modules/content/application/domain/listing.rs

use super::entities::ContentMeta;

/// A record that can appear in a public listing.
pub trait Listed {
    fn meta(&self) -> &ContentMeta;

    /// Every bilingual pair is filled in both locales.
    fn is_publishable(&self) -> bool;
}

/// Public view of a listing: active and publishable records only, ordered by
/// `order` then `created_at` (id breaks exact ties so output is stable).
pub fn arrange_visible<T: Listed>(mut records: Vec<T>) -> Vec<T> {
    records.retain(|r| r.meta().is_active && r.is_publishable());
    records.sort_by(|a, b| {
        let (a, b) = (a.meta(), b.meta());
        a.order
            .cmp(&b.order)
            .then(a.created_at.cmp(&b.created_at))
            .then(a.id.cmp(&b.id))
    });
    records
}
