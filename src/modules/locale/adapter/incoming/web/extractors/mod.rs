pub mod locale;

pub use locale::ResolvedLocale;
