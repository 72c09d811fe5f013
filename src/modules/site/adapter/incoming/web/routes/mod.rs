mod get_home_page;
mod get_projects;
mod get_service_page;

pub use get_home_page::{__path_get_home_page_handler, get_home_page_handler};
pub use get_projects::{__path_get_projects_handler, get_projects_handler, ProjectsQueryParams};
pub use get_service_page::{__path_get_service_page_handler, get_service_page_handler};
