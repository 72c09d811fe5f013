pub mod content_query;
pub mod content_repository;

pub use content_query::{ContentQuery, ContentQueryError, ProjectFilter};
pub use content_repository::{
    ContentRepository, ContentRepositoryError, NewCompanyInfo, NewFaq, NewHeroSlide, NewProject,
    NewService, NewServiceFeature, NewTestimonial, PatchField, TestimonialPatch,
};
