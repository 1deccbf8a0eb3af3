//! Page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between
//! portrait and landscape, or [`named`](crate::pagesize::named) to look a size up by name
//! (`"A4"`, `"A4Landscape"`, `"LetterLandscape"`, ...).
//!
//! # Example
//!
//! ```
//! use pdf_grid::pagesize::{self, PageOrientation, A4};
//!
//! assert_eq!(pagesize::named("A4Landscape"), Some(A4.landscape()));
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageSize = (Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));

// iso a-series (converted from mm to points, rounded like most drawing tools do)
pub const A0: PageSize = (Pt(2384.0), Pt(3371.0));
pub const A1: PageSize = (Pt(1685.0), Pt(2384.0));
pub const A2: PageSize = (Pt(1190.0), Pt(1684.0));
pub const A3: PageSize = (Pt(842.0), Pt(1190.0));
pub const A4: PageSize = (Pt(595.0), Pt(842.0));
pub const A5: PageSize = (Pt(420.0), Pt(595.0));
pub const A6: PageSize = (Pt(297.0), Pt(420.0));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// Look up a page size by name. Names are case-insensitive and may carry a
/// `Landscape` suffix; unknown names give [None].
pub fn named(name: &str) -> Option<PageSize> {
    let lower = name.to_ascii_lowercase();
    let (base, landscape) = match lower.strip_suffix("landscape") {
        Some(base) => (base, true),
        None => (lower.as_str(), false),
    };

    let size = match base {
        "letter" => LETTER,
        "halfletter" => HALF_LETTER,
        "legal" => LEGAL,
        "tabloid" => TABLOID,
        "a0" => A0,
        "a1" => A1,
        "a2" => A2,
        "a3" => A3,
        "a4" => A4,
        "a5" => A5,
        "a6" => A6,
        _ => return None,
    };

    Some(if landscape { size.landscape() } else { size })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_sizes_honour_the_landscape_suffix() {
        assert_eq!(named("A4"), Some(A4));
        assert_eq!(named("A4Landscape"), Some((Pt(842.0), Pt(595.0))));
        assert_eq!(named("letterlandscape"), Some(LETTER.landscape()));
        assert_eq!(named("B5"), None);
    }
}
