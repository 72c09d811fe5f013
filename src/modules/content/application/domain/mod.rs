pub mod bilingual;
pub mod entities;
pub mod listing;
pub mod values;

pub use bilingual::{Bilingual, BilingualText};
pub use entities::{
    CompanyInfo, ContentKind, ContentMeta, Faq, HeroSlide, Project, Service, ServiceFeature,
    Testimonial,
};
pub use listing::{arrange_visible, Listed};
pub use values::{CompanyInfoKey, ContentValidationError, Rating, Slug};
