pub mod browse_content_service;
pub mod register_content_service;
pub mod seed_content;

pub use browse_content_service::BrowseContentService;
pub use register_content_service::RegisterContentService;
pub use seed_content::{ContentSeeder, SeedReport};
