//! Baseline grids.
//!
//! A [`BaselineGrid`] is a stack of horizontal lines one `line_height` apart,
//! hanging from the top of its area: line 0 is the top edge and every index
//! steps one pitch down. The grid stops at the lowest line that still fits,
//! so its usable height is always a whole number of lines.
//!
//! The lookup helpers (`closest_line_below_coordinate` and friends) scan the
//! lines from the top and return the first one that qualifies.

use crate::area::Area;
use crate::canvas::Canvas;
use crate::colour::{colours, Colour};
use crate::guides::Guides;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::slice::Slice;
use crate::units::Pt;
use crate::GridError;
use derive_more::Deref;
use std::ops::Mul;

#[derive(Debug, Copy, Clone, PartialEq, Deref)]
pub struct BaselineGrid {
    #[deref]
    area: Area,
    line_height: Pt,
}

impl BaselineGrid {
    /// The area is normalized, lines always run from its top edge downward
    pub fn new(area: Area, line_height: Pt) -> BaselineGrid {
        BaselineGrid {
            area: area.normalized(),
            line_height,
        }
    }

    /// Build the grid on an area derived from the page, see
    /// [`Area::from_margins`]
    pub fn from_margins(margins: Margins, page_size: PageSize, line_height: Pt) -> BaselineGrid {
        BaselineGrid::new(Area::from_margins(margins, page_size), line_height)
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    /// Distance between two consecutive lines
    pub fn line_height(&self) -> Pt {
        self.line_height
    }

    /// Number of lines that fit in the area, the top edge included
    pub fn len(&self) -> usize {
        (self.area.height() / self.line_height).floor().abs() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The absolute y value of the lowest line. This is the effective bottom
    /// of the grid and usually sits above the bottom of the area.
    pub fn bottom(&self) -> Pt {
        self.line(-1)
    }

    /// Distance from the first line to the last one
    pub fn height(&self) -> Pt {
        self.top() - self.bottom()
    }

    pub fn vertical_center(&self) -> Pt {
        self.bottom() + self.height() / 2.0
    }

    pub fn center(&self) -> (Pt, Pt) {
        (self.horizontal_center(), self.vertical_center())
    }

    /// Vertical extent of `span` lines; negative because lines run downward
    pub fn span(&self, span: f32) -> Pt {
        -self.line_height * span
    }

    /// The absolute y value of line `index`. Negative indices count from the
    /// lowest line upward.
    pub fn line(&self, index: isize) -> Pt {
        let index = if index >= 0 {
            index
        } else {
            self.len() as isize + index
        };
        self.top() - self.line_height * index as f32
    }

    /// The absolute y values of the lines selected by `slice`
    pub fn lines<S: Into<Slice>>(&self, slice: S) -> Result<Vec<Pt>, GridError> {
        Ok(slice
            .into()
            .indices(self.len())?
            .map(|i| self.line(i))
            .collect())
    }

    /// Every line from the top down
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Pt> + '_ {
        (0..self.len()).map(move |i| self.line(i as isize))
    }

    /// Index of the topmost line at or below `y`
    pub fn baseline_index_from_coordinate(&self, y: Pt) -> Option<usize> {
        self.iter().position(|line| y >= line)
    }

    /// The topmost line at or below `y`
    pub fn closest_line_below_coordinate(&self, y: Pt) -> Option<Pt> {
        self.iter().find(|&line| y >= line)
    }

    /// One line above the topmost line strictly below `y`. When `y` sits on a
    /// line this is that line, otherwise it is the line just above `y`.
    pub fn closest_line_above_coordinate(&self, y: Pt) -> Option<Pt> {
        self.iter()
            .find(|&line| y > line)
            .map(|line| line + self.line_height)
    }
}

/// `&baselines * 4.0` is shorthand for `baselines.span(4.0)`
impl Mul<f32> for &BaselineGrid {
    type Output = Pt;

    fn mul(self, span: f32) -> Pt {
        self.span(span)
    }
}

impl Guides for BaselineGrid {
    fn draw_frame<C: Canvas>(&self, canvas: &mut C) {
        for line in self.iter() {
            canvas.line((self.left(), line), (self.right(), line));
        }
    }

    fn draw_indexes<C: Canvas>(&self, canvas: &mut C) {
        for (i, line) in self.iter().enumerate() {
            canvas.text(&i.to_string(), (self.left() + Pt(2.0), line + Pt(2.0)));
        }
    }

    fn guide_colour(&self) -> Colour {
        colours::BASELINE_GUIDE
    }
}
