pub mod locale;

pub use locale::{localized_path, Direction, HorizontalSide, LayoutHints, Locale, PageContext};
