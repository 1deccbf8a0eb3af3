//! Column and row grids.
//!
//! An [`Axis`] splits one direction of an [`Area`] into `subdivisions` equal
//! slots separated by a fixed gutter. Reading slot `i` gives the absolute
//! coordinate where that slot starts; [`Axis::span`] gives the size of any
//! (possibly fractional) number of consecutive slots, gutters included.
//!
//! [`ColumnGrid`] runs left to right, [`RowGrid`] bottom to top. Negative
//! indices count backwards from the far end: `-1` is the far edge itself, so
//! the last slot is reached with a negative span, `columns.slot(-1)` plus
//! `columns.span(-1.0)`.
//!
//! ```
//! use pdf_grid::{Area, ColumnGrid, Pt};
//!
//! let columns = ColumnGrid::new(Area::new(Pt(50.0), Pt(50.0), Pt(900.0), Pt(900.0)), 8, Pt(10.0));
//! assert_eq!(columns.slot(0), Pt(50.0));
//! // three columns wide, the two gutters between them included
//! assert_eq!(columns.span(3.0), columns.column_width() * 3.0 + Pt(20.0));
//! ```

use crate::area::Area;
use crate::canvas::Canvas;
use crate::guides::Guides;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::slice::Slice;
use crate::units::Pt;
use crate::GridError;
use derive_more::Deref;
use std::marker::PhantomData;
use std::ops::Mul;

pub const DEFAULT_SUBDIVISIONS: usize = 8;
pub const DEFAULT_GUTTER: Pt = Pt(10.0);

/// Which way an [`Axis`] runs across its area
pub trait Direction {
    /// Coordinate where slot 0 starts
    fn start_point(area: &Area) -> Pt;

    /// Coordinate where the last slot ends
    fn end_point(area: &Area) -> Pt;

    fn reference_dimension(area: &Area) -> Pt {
        Self::end_point(area) - Self::start_point(area)
    }
}

/// Left to right
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Horizontal;

/// Bottom to top
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Vertical;

impl Direction for Horizontal {
    fn start_point(area: &Area) -> Pt {
        area.left()
    }

    fn end_point(area: &Area) -> Pt {
        area.right()
    }
}

impl Direction for Vertical {
    fn start_point(area: &Area) -> Pt {
        area.bottom()
    }

    fn end_point(area: &Area) -> Pt {
        area.top()
    }
}

/// Equal slots separated by a gutter along one direction of an area
#[derive(Debug, Copy, Clone, PartialEq, Deref)]
pub struct Axis<D> {
    #[deref]
    area: Area,
    subdivisions: usize,
    gutter: Pt,
    direction: PhantomData<D>,
}

/// Columns, indexed left to right
pub type ColumnGrid = Axis<Horizontal>;

/// Rows, indexed bottom to top
pub type RowGrid = Axis<Vertical>;

impl<D: Direction> Axis<D> {
    pub fn new(area: Area, subdivisions: usize, gutter: Pt) -> Axis<D> {
        Axis {
            area,
            subdivisions,
            gutter,
            direction: PhantomData,
        }
    }

    /// Eight subdivisions with 10pt gutters
    pub fn default_for(area: Area) -> Axis<D> {
        Axis::new(area, DEFAULT_SUBDIVISIONS, DEFAULT_GUTTER)
    }

    /// Build the axis on an area derived from the page, see
    /// [`Area::from_margins`]
    pub fn from_margins(
        margins: Margins,
        page_size: PageSize,
        subdivisions: usize,
        gutter: Pt,
    ) -> Axis<D> {
        Axis::new(Area::from_margins(margins, page_size), subdivisions, gutter)
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    pub fn gutter(&self) -> Pt {
        self.gutter
    }

    fn start_point(&self) -> Pt {
        D::start_point(&self.area)
    }

    fn end_point(&self) -> Pt {
        D::end_point(&self.area)
    }

    /// The absolute dimension of a single subdivision within the grid
    pub fn subdivision_dimension(&self) -> Pt {
        let count = self.subdivisions as f32;
        (D::reference_dimension(&self.area) - self.gutter * (count - 1.0)) / count
    }

    /// Distance from the start of one slot to the start of the next
    fn pitch(&self) -> Pt {
        self.gutter + self.subdivision_dimension()
    }

    /// The absolute dimension of `span` consecutive subdivisions, including
    /// the gutters between them. Fractional spans are allowed; negative spans
    /// measure backwards.
    pub fn span(&self, span: f32) -> Pt {
        let gutters = if span >= 0.0 {
            span.ceil() - 1.0
        } else {
            span.ceil() + 1.0
        };
        self.subdivision_dimension() * span + self.gutter * gutters
    }

    /// Absolute coordinate where slot `index` starts. Negative indices count
    /// from the far end of the axis.
    pub fn slot(&self, index: isize) -> Pt {
        if index >= 0 {
            self.start_point() + self.pitch() * index as f32
        } else {
            self.end_point() + self.pitch() * (index + 1) as f32
        }
    }

    /// Start coordinates of the slots selected by `slice`
    pub fn slots<S: Into<Slice>>(&self, slice: S) -> Result<Vec<Pt>, GridError> {
        Ok(slice
            .into()
            .indices(self.len())?
            .map(|i| self.slot(i))
            .collect())
    }

    pub fn len(&self) -> usize {
        self.subdivisions
    }

    pub fn is_empty(&self) -> bool {
        self.subdivisions == 0
    }

    /// Start coordinates of every slot, first to last
    pub fn iter(&self) -> Slots<'_, D> {
        Slots {
            axis: self,
            next: 0,
        }
    }
}

impl ColumnGrid {
    pub fn columns(&self) -> usize {
        self.subdivisions
    }

    pub fn column_width(&self) -> Pt {
        self.subdivision_dimension()
    }
}

impl RowGrid {
    pub fn rows(&self) -> usize {
        self.subdivisions
    }

    pub fn row_height(&self) -> Pt {
        self.subdivision_dimension()
    }
}

/// Iterator over the slot coordinates of an [`Axis`]
#[derive(Debug, Clone)]
pub struct Slots<'a, D> {
    axis: &'a Axis<D>,
    next: usize,
}

impl<D: Direction> Iterator for Slots<'_, D> {
    type Item = Pt;

    fn next(&mut self) -> Option<Pt> {
        if self.next >= self.axis.len() {
            return None;
        }
        let slot = self.axis.slot(self.next as isize);
        self.next += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.axis.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<D: Direction> ExactSizeIterator for Slots<'_, D> {}

impl<'a, D: Direction> IntoIterator for &'a Axis<D> {
    type Item = Pt;
    type IntoIter = Slots<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `&columns * 3.0` is shorthand for `columns.span(3.0)`
impl<D: Direction> Mul<f32> for &Axis<D> {
    type Output = Pt;

    fn mul(self, span: f32) -> Pt {
        self.span(span)
    }
}

impl<D: Direction> Mul<f32> for Axis<D> {
    type Output = Pt;

    fn mul(self, span: f32) -> Pt {
        self.span(span)
    }
}

impl Guides for ColumnGrid {
    fn draw_frame<C: Canvas>(&self, canvas: &mut C) {
        let width = self.column_width();
        for column in self {
            canvas.rect(Rect::from_xywh(column, self.bottom(), width, self.height()));
        }
    }

    fn draw_indexes<C: Canvas>(&self, canvas: &mut C) {
        for (i, column) in self.iter().enumerate() {
            canvas.text(&i.to_string(), (column + Pt(2.0), self.bottom() + Pt(2.0)));
        }
    }
}

impl Guides for RowGrid {
    fn draw_frame<C: Canvas>(&self, canvas: &mut C) {
        for row in self {
            canvas.line((self.left(), row), (self.right(), row));
        }
    }

    fn draw_indexes<C: Canvas>(&self, canvas: &mut C) {
        for (i, row) in self.iter().enumerate() {
            canvas.text(&i.to_string(), (self.left() + Pt(2.0), row + Pt(2.0)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(x: f32, y: f32, w: f32, h: f32) -> Area {
        Area::new(Pt(x), Pt(y), Pt(w), Pt(h))
    }

    #[test]
    fn column_width_leaves_room_for_gutters() {
        let columns = ColumnGrid::new(area(10.0, 20.0, 100.0, 200.0), 4, Pt(5.0));
        assert_eq!(columns.columns(), 4);
        assert_eq!(columns.column_width(), Pt(21.25));
    }

    #[test]
    fn columns_run_left_to_right() {
        let columns = ColumnGrid::new(area(0.0, 0.0, 100.0, 100.0), 4, Pt(5.0));
        assert_eq!(columns.slot(0), Pt(0.0));
        assert_eq!(columns.slot(1), Pt(26.25));
        assert_eq!(columns.slots(1..3).unwrap(), vec![Pt(26.25), Pt(52.5)]);
    }

    #[test]
    fn negative_index_is_the_start_of_a_slot_from_the_end() {
        let columns = ColumnGrid::new(area(0.0, 0.0, 100.0, 100.0), 4, Pt(5.0));
        assert_eq!(columns.slot(-1), Pt(100.0));
        assert_eq!(columns.slot(-2), Pt(73.75));
    }

    #[test]
    fn rows_run_bottom_to_top() {
        let rows = RowGrid::new(area(10.0, 20.0, 100.0, 200.0), 4, Pt(5.0));
        assert_eq!(rows.rows(), 4);
        assert_eq!(rows.row_height(), Pt(46.25));

        let rows = RowGrid::new(area(0.0, 0.0, 100.0, 100.0), 4, Pt(5.0));
        assert_eq!(rows.slot(0), Pt(0.0));
        assert_eq!(rows.slot(1), Pt(26.25));
        assert_eq!(rows.slot(-1), Pt(100.0));
    }

    #[test]
    fn spans_count_internal_gutters() {
        let columns = ColumnGrid::new(area(0.0, 0.0, 100.0, 100.0), 4, Pt(5.0));
        assert_eq!(columns.span(1.0), Pt(21.25));
        assert_eq!(columns.span(3.0), Pt(21.25 * 3.0 + 10.0));
        assert_eq!(columns.span(4.0), Pt(100.0));
        assert_eq!(&columns * 2.0, Pt(47.5));
    }

    #[test]
    fn fractional_spans_round_gutters_up() {
        let columns = ColumnGrid::new(area(0.0, 0.0, 100.0, 100.0), 4, Pt(5.0));
        // half a column: no gutter
        assert_eq!(columns.span(0.5), Pt(10.625));
        // one and a half columns: one gutter
        assert_eq!(columns.span(1.5), Pt(31.875 + 5.0));
    }

    #[test]
    fn negative_spans_mirror_positive_ones() {
        let columns = ColumnGrid::new(area(0.0, 0.0, 100.0, 100.0), 4, Pt(5.0));
        assert_eq!(columns.span(-1.0), Pt(-21.25));
        assert_eq!(columns.span(-3.0), -columns.span(3.0));
    }

    #[test]
    fn iteration_is_restartable() {
        let rows = RowGrid::new(area(0.0, 0.0, 100.0, 100.0), 4, Pt(5.0));
        let first: Vec<Pt> = rows.iter().collect();
        let second: Vec<Pt> = (&rows).into_iter().collect();
        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        assert_eq!(rows.iter().len(), 4);
    }

    #[test]
    fn edges_come_from_the_area() {
        let columns = ColumnGrid::default_for(area(10.0, 20.0, 100.0, 200.0));
        assert_eq!(columns.left(), Pt(10.0));
        assert_eq!(columns.right(), Pt(110.0));
        assert_eq!(columns.subdivisions(), 8);
        assert_eq!(columns.gutter(), Pt(10.0));
    }
}
