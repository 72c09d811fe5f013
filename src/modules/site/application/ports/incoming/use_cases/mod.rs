pub mod compose_home_page;
pub mod compose_service_page;
pub mod list_projects;
pub mod page_error;

pub use compose_home_page::ComposeHomePageUseCase;
pub use compose_service_page::ComposeServicePageUseCase;
pub use list_projects::ListProjectsUseCase;
pub use page_error::ComposePageError;
