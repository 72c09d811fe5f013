pub mod domain;
pub mod resolver;
