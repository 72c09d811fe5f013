// src/modules/locale/application/domain/locale.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Locale
// ──────────────────────────────────────────────────────────
//

/// Supported site locales. Only exact lowercase codes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ar, Locale::En];

    pub const fn code(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Exact match against the supported set. No case folding, no region variants.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    pub const fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    /// The other supported locale (language switch target).
    pub const fn alternate(self) -> Locale {
        match self {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Ar,
        }
    }

    /// Open Graph `og:locale` value.
    pub const fn open_graph_locale(self) -> &'static str {
        match self {
            Locale::Ar => "ar_SA",
            Locale::En => "en_US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

//
// ──────────────────────────────────────────────────────────
// Direction
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

/// Physical horizontal side, used for arrow/icon orientation and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalSide {
    Left,
    Right,
}

impl HorizontalSide {
    pub const fn opposite(self) -> Self {
        match self {
            HorizontalSide::Left => HorizontalSide::Right,
            HorizontalSide::Right => HorizontalSide::Left,
        }
    }
}

impl Direction {
    pub const fn as_attr(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }

    /// Side where reading starts.
    pub const fn inline_start(self) -> HorizontalSide {
        match self {
            Direction::Rtl => HorizontalSide::Right,
            Direction::Ltr => HorizontalSide::Left,
        }
    }

    pub const fn inline_end(self) -> HorizontalSide {
        self.inline_start().opposite()
    }

    /// Mirrors a side authored for left-to-right layouts.
    pub const fn mirror(self, ltr_side: HorizontalSide) -> HorizontalSide {
        match self {
            Direction::Ltr => ltr_side,
            Direction::Rtl => ltr_side.opposite(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Per-request context
// ──────────────────────────────────────────────────────────
//

/// Presentation hints derived once from the direction and handed to every surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct LayoutHints {
    pub inline_start: HorizontalSide,
    pub inline_end: HorizontalSide,
    /// "next" / "learn more" arrows
    pub forward_arrow: HorizontalSide,
    /// "back" arrows
    pub backward_arrow: HorizontalSide,
}

impl LayoutHints {
    pub const fn for_direction(dir: Direction) -> Self {
        Self {
            inline_start: dir.inline_start(),
            inline_end: dir.inline_end(),
            forward_arrow: dir.mirror(HorizontalSide::Right),
            backward_arrow: dir.mirror(HorizontalSide::Left),
        }
    }
}

/// Immutable per-request rendering context. Passed explicitly, never stored globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageContext {
    pub locale: Locale,
    pub lang: Locale,
    pub dir: Direction,
    pub layout: LayoutHints,
}

impl PageContext {
    pub const fn new(locale: Locale) -> Self {
        let dir = locale.direction();
        Self {
            locale,
            lang: locale,
            dir,
            layout: LayoutHints::for_direction(dir),
        }
    }

    /// Same path in the other locale, e.g. `/ar/services/x` -> `/en/services/x`.
    pub fn alternate_path(&self, rest: &str) -> String {
        localized_path(self.locale.alternate(), rest)
    }

    pub fn path(&self, rest: &str) -> String {
        localized_path(self.locale, rest)
    }
}

/// Joins a locale prefix with a locale-less path.
pub fn localized_path(locale: Locale, rest: &str) -> String {
    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Direction::Rtl.as_attr(), "rtl");
    }

    #[test]
    fn from_code_is_exact() {
        assert_eq!(Locale::from_code("ar"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("AR"), None);
        assert_eq!(Locale::from_code("en-US"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn arrows_point_opposite_ways_across_locales() {
        let ar = PageContext::new(Locale::Ar).layout;
        let en = PageContext::new(Locale::En).layout;

        assert_eq!(en.forward_arrow, HorizontalSide::Right);
        assert_eq!(ar.forward_arrow, HorizontalSide::Left);
        assert_eq!(ar.forward_arrow, en.forward_arrow.opposite());
        assert_eq!(ar.backward_arrow, en.backward_arrow.opposite());
        assert_eq!(ar.inline_start, HorizontalSide::Right);
        assert_eq!(en.inline_start, HorizontalSide::Left);
    }

    #[test]
    fn alternate_path_swaps_prefix() {
        let ctx = PageContext::new(Locale::Ar);
        assert_eq!(ctx.alternate_path("/services/carShades"), "/en/services/carShades");
        assert_eq!(ctx.path(""), "/ar");
        assert_eq!(localized_path(Locale::En, "projects"), "/en/projects");
    }
}
