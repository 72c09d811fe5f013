pub mod catalog;
pub mod content;
pub mod inquiry;
pub mod locale;
pub mod site;
