use crate::area::Area;
use crate::axis::{ColumnGrid, RowGrid, DEFAULT_GUTTER, DEFAULT_SUBDIVISIONS};
use crate::canvas::Canvas;
use crate::guides::Guides;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::units::Pt;
use derive_more::Deref;
use std::ops::Mul;

/// Columns and rows laid over the same area.
///
/// A point in the grid is addressed by `(column, row)`; both indices may be
/// negative to count from the right / top. Spans work the same way and give
/// `(width, height)` pairs, so a cell block is
/// `Rect::from_xywh(x, y, w, h)` of `grid.point(c, r)` and `grid.span(cs, rs)`.
///
/// ```
/// use pdf_grid::{Area, Grid, Pt};
///
/// let grid = Grid::new(Area::new(Pt(10.0), Pt(20.0), Pt(100.0), Pt(200.0)), 4, 4, Pt(10.0), Pt(10.0));
/// assert_eq!(grid.point(1, 2), (Pt(37.5), Pt(125.0)));
/// assert_eq!(grid.len(), 16);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Deref)]
pub struct Grid {
    #[deref]
    area: Area,
    pub columns: ColumnGrid,
    pub rows: RowGrid,
}

impl Grid {
    pub fn new(
        area: Area,
        column_subdivisions: usize,
        row_subdivisions: usize,
        column_gutter: Pt,
        row_gutter: Pt,
    ) -> Grid {
        Grid {
            area,
            columns: ColumnGrid::new(area, column_subdivisions, column_gutter),
            rows: RowGrid::new(area, row_subdivisions, row_gutter),
        }
    }

    /// Eight columns and eight rows with 10pt gutters
    pub fn default_for(area: Area) -> Grid {
        Grid::new(
            area,
            DEFAULT_SUBDIVISIONS,
            DEFAULT_SUBDIVISIONS,
            DEFAULT_GUTTER,
            DEFAULT_GUTTER,
        )
    }

    /// Build the grid on an area derived from the page, see
    /// [`Area::from_margins`]
    pub fn from_margins(
        margins: Margins,
        page_size: PageSize,
        column_subdivisions: usize,
        row_subdivisions: usize,
        column_gutter: Pt,
        row_gutter: Pt,
    ) -> Grid {
        Grid::new(
            Area::from_margins(margins, page_size),
            column_subdivisions,
            row_subdivisions,
            column_gutter,
            row_gutter,
        )
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    pub fn column_width(&self) -> Pt {
        self.columns.column_width()
    }

    pub fn row_height(&self) -> Pt {
        self.rows.row_height()
    }

    pub fn column_span(&self, span: f32) -> Pt {
        self.columns.span(span)
    }

    pub fn row_span(&self, span: f32) -> Pt {
        self.rows.span(span)
    }

    /// Width of `column_span` columns and height of `row_span` rows
    pub fn span(&self, column_span: f32, row_span: f32) -> (Pt, Pt) {
        (self.column_span(column_span), self.row_span(row_span))
    }

    /// Lower left corner of the cell at `(column, row)`
    pub fn point(&self, column: isize, row: isize) -> (Pt, Pt) {
        (self.columns.slot(column), self.rows.slot(row))
    }

    pub fn len(&self) -> usize {
        self.columns.len() * self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every cell corner, row by row from the bottom, left to right within a
    /// row
    pub fn iter(&self) -> impl Iterator<Item = (Pt, Pt)> + '_ {
        self.rows
            .iter()
            .flat_map(move |row| self.columns.iter().map(move |column| (column, row)))
    }
}

/// `&grid * (3.0, 2.0)` is shorthand for `grid.span(3.0, 2.0)`
impl Mul<(f32, f32)> for &Grid {
    type Output = (Pt, Pt);

    fn mul(self, (column_span, row_span): (f32, f32)) -> (Pt, Pt) {
        self.span(column_span, row_span)
    }
}

impl Guides for Grid {
    fn draw_frame<C: Canvas>(&self, canvas: &mut C) {
        self.columns.draw_frame(canvas);
        self.rows.draw_frame(canvas);
    }

    fn draw_indexes<C: Canvas>(&self, canvas: &mut C) {
        for (c, column) in self.columns.iter().enumerate() {
            for (r, row) in self.rows.iter().enumerate() {
                canvas.text(&format!("({c}, {r})"), (column + Pt(2.0), row + Pt(2.0)));
            }
        }
    }
}
