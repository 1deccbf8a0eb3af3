use crate::units::Pt;

/// Offsets applied to the four edges of a page to derive a working area from it,
/// see [`Area::from_margins`](crate::Area::from_margins).
///
/// Offsets push the edges *outward*: a negative value insets the edge into the
/// page, a positive value moves it beyond the page edge. So
/// `Margins::lbrt(Pt(-50.0), ..)` keeps 50pt clear on the left.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub left: Pt,
    pub bottom: Pt,
    pub right: Pt,
    pub top: Pt,
}

impl Margins {
    /// Create margins by specifying individual components counter-clockwise,
    /// starting at the left
    pub fn lbrt(left: Pt, bottom: Pt, right: Pt, top: Pt) -> Margins {
        Margins {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins::lbrt(left, bottom, right, top)
    }

    /// Create margins where all offsets are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::lbrt(value, value, value, value)
    }

    /// Create margins that keep `value` clear of every page edge
    pub fn inset<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::all(-value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) offsets
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins::lbrt(horizontal, vertical, horizontal, vertical)
    }

    /// Create margins where all values are 0.0, i.e. the full page
    pub fn empty() -> Margins {
        Margins::default()
    }
}

impl<L, B, R, T> From<(L, B, R, T)> for Margins
where
    L: Into<Pt>,
    B: Into<Pt>,
    R: Into<Pt>,
    T: Into<Pt>,
{
    /// Tuples are read as `(left, bottom, right, top)`
    fn from((l, b, r, t): (L, B, R, T)) -> Self {
        Margins::lbrt(l.into(), b.into(), r.into(), t.into())
    }
}
