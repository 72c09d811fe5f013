pub mod domain;
pub mod ports;
pub mod service;
pub mod site_use_cases;

pub use site_use_cases::SiteUseCases;
