pub mod compose_home_page_service;
pub mod compose_service_page_service;
pub mod list_projects_service;
pub mod localized_content;
pub mod page_composer;

pub use localized_content::LocalizedContent;
pub use page_composer::PageComposer;
