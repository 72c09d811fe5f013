pub mod message_catalog;

pub use message_catalog::{interpolate, CatalogError, MessageCatalog};
