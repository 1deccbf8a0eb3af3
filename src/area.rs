//! Rectangular working areas.

use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

/// An origin plus an extent, in canvas units. This is the rectangle every grid
/// is built on; grids dereference to their area so edges can be queried on the
/// grid directly.
///
/// The extent may be negative. Edge queries report the raw values (`top` is
/// always `y + height`), use [`Area::normalized`] when direction matters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Area {
    x: Pt,
    y: Pt,
    width: Pt,
    height: Pt,
}

impl Area {
    pub fn new<X, Y, W, H>(x: X, y: Y, width: W, height: H) -> Area
    where
        X: Into<Pt>,
        Y: Into<Pt>,
        W: Into<Pt>,
        H: Into<Pt>,
    {
        Area {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn from_rect(rect: Rect) -> Area {
        Area::new(rect.x(), rect.y(), rect.width(), rect.height())
    }

    /// Derive an area from a page by pushing each page edge outward by the
    /// matching margin offset (negative offsets inset the edge).
    ///
    /// `page_size` is the size of the page currently being drawn, usually
    /// [`Canvas::page_size`](crate::Canvas::page_size).
    pub fn from_margins(margins: Margins, page_size: PageSize) -> Area {
        let (page_width, page_height) = page_size;
        Area {
            x: -margins.left,
            y: -margins.bottom,
            width: page_width + margins.left + margins.right,
            height: page_height + margins.bottom + margins.top,
        }
    }

    pub fn x(&self) -> Pt {
        self.x
    }

    pub fn y(&self) -> Pt {
        self.y
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn height(&self) -> Pt {
        self.height
    }

    /// The absolute y value of the top of the area
    pub fn top(&self) -> Pt {
        self.y + self.height
    }

    /// The absolute y value of the bottom of the area
    pub fn bottom(&self) -> Pt {
        self.y
    }

    /// The absolute x value of the left of the area
    pub fn left(&self) -> Pt {
        self.x
    }

    /// The absolute x value of the right of the area
    pub fn right(&self) -> Pt {
        self.x + self.width
    }

    pub fn horizontal_center(&self) -> Pt {
        self.x + self.width / 2.0
    }

    pub fn vertical_center(&self) -> Pt {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> (Pt, Pt) {
        (self.horizontal_center(), self.vertical_center())
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }

    /// The same area with a non-negative extent
    pub fn normalized(&self) -> Area {
        Area::from_rect(self.rect().normalized())
    }
}

impl From<Rect> for Area {
    fn from(rect: Rect) -> Self {
        Area::from_rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_center_derive_from_origin_and_extent() {
        let area = Area::new(Pt(10.0), Pt(20.0), Pt(100.0), Pt(200.0));
        assert_eq!(area.top(), Pt(220.0));
        assert_eq!(area.bottom(), Pt(20.0));
        assert_eq!(area.left(), Pt(10.0));
        assert_eq!(area.right(), Pt(110.0));
        assert_eq!(area.center(), (Pt(60.0), Pt(120.0)));
    }

    #[test]
    fn negative_margins_inset_the_page() {
        let area = Area::from_margins(Margins::inset(Pt(50.0)), (Pt(1000.0), Pt(1000.0)));
        assert_eq!(area, Area::new(Pt(50.0), Pt(50.0), Pt(900.0), Pt(900.0)));
    }

    #[test]
    fn zero_margins_cover_the_page() {
        let area = Area::from_margins(Margins::empty(), (Pt(1000.0), Pt(1000.0)));
        assert_eq!(area, Area::new(Pt(0.0), Pt(0.0), Pt(1000.0), Pt(1000.0)));
    }

    #[test]
    fn positive_margins_bleed_past_the_page() {
        let margins = Margins::lbrt(Pt(5.0), Pt(10.0), Pt(0.0), Pt(0.0));
        let area = Area::from_margins(margins, (Pt(100.0), Pt(100.0)));
        assert_eq!((area.x(), area.y()), (Pt(-5.0), Pt(-10.0)));
        assert_eq!((area.width(), area.height()), (Pt(105.0), Pt(110.0)));
    }

    #[test]
    fn flipped_area_normalizes() {
        let area = Area::new(Pt(0.0), Pt(100.0), Pt(50.0), Pt(-100.0));
        assert_eq!(area.top(), Pt(0.0));
        assert_eq!(area.normalized(), Area::new(Pt(0.0), Pt(0.0), Pt(50.0), Pt(100.0)));
    }
}
