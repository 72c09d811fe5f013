pub mod json_catalog;

pub use json_catalog::JsonMessageCatalog;
