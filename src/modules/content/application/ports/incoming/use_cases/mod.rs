pub mod browse_content;
pub mod register_content;

pub use browse_content::{BrowseContentError, BrowseContentUseCase};
pub use register_content::{
    CreateServiceCommand, CreateTestimonialCommand, PatchTestimonialCommand,
    RegisterContentError, RegisterContentUseCase, UpsertCompanyInfoCommand,
};
