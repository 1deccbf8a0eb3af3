//! Tables whose rows grow to fit their text.
//!
//! A [`Table`] hangs from the top edge it was given: the header row comes
//! first, then an optional gap, then one row per item. Every row is as tall
//! as its tallest cell, and never shorter than the base row height.

use super::text::{vertical_align_text_box, TextBoxOptions, VerticalAlign};
use crate::canvas::{Canvas, HorizontalAlign};
use crate::guides::Guides;
use crate::rect::Rect;
use crate::units::Pt;
use std::collections::HashMap;

/// One item of a table: cell text keyed by column title
pub type TableItem = HashMap<String, String>;

/// Describes one column of a [`Table`]
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescription {
    /// Key of the column in every [`TableItem`]
    pub title: String,
    /// Fixed width; columns without one share the remaining width
    pub width: Option<Pt>,
    /// Text of the header cell, the title is used when there is none
    pub label: Option<String>,
}

impl ColumnDescription {
    pub fn new<S: ToString>(title: S) -> ColumnDescription {
        ColumnDescription {
            title: title.to_string(),
            width: None,
            label: None,
        }
    }

    pub fn width(mut self, width: Pt) -> ColumnDescription {
        self.width = Some(width);
        self
    }

    pub fn label<S: ToString>(mut self, label: S) -> ColumnDescription {
        self.label = Some(label.to_string());
        self
    }
}

/// Options for [`Table::new`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TableOptions {
    /// Minimum height of every row
    pub base_row_height: Pt,
    /// Space between the edges of a cell and its text
    pub margins: Pt,
    /// Space between the header and the first row
    pub header_gap: Pt,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            base_row_height: Pt(12.0),
            margins: Pt(6.0),
            header_gap: Pt(0.0),
        }
    }
}

impl TableOptions {
    pub fn new() -> TableOptions {
        TableOptions::default()
    }

    pub fn base_row_height(&mut self, base_row_height: Pt) -> &mut Self {
        self.base_row_height = base_row_height;
        self
    }

    pub fn margins(&mut self, margins: Pt) -> &mut Self {
        self.margins = margins;
        self
    }

    pub fn header_gap(&mut self, header_gap: Pt) -> &mut Self {
        self.header_gap = header_gap;
        self
    }
}

/// A cell of a [`Table`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellBox {
    rect: Rect,
    margins: Pt,
}

impl CellBox {
    /// The whole cell
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The cell minus its margins on every side
    pub fn text_box(&self) -> Rect {
        self.rect.outset(-self.margins, -self.margins)
    }

    /// The cell minus its horizontal margins
    pub fn raw_text_box(&self) -> Rect {
        self.rect.outset(-self.margins, Pt(0.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    x: Pt,
    top: Pt,
    width: Pt,
    margins: Pt,
    header_gap: Pt,
    show_header: bool,
    /// Center the text of every cell vertically instead of top aligning it
    pub vertical_align: bool,
    column_widths: Vec<Pt>,
    column_origins: Vec<Pt>,
    /// Header first
    rows: Vec<Vec<String>>,
    /// Measured height of every row in `rows`
    heights: Vec<Pt>,
}

impl Table {
    /// Lay `items` out in a table `width` wide hanging from `(x, top)`.
    ///
    /// Row heights are measured with the canvas' current font settings.
    pub fn new<C: Canvas>(
        canvas: &mut C,
        (x, top, width): (Pt, Pt, Pt),
        items: &[TableItem],
        columns: &[ColumnDescription],
        options: &TableOptions,
    ) -> Table {
        let fixed: Pt = columns.iter().filter_map(|c| c.width).sum();
        let flexible = columns.iter().filter(|c| c.width.is_none()).count();
        let flex_width = (width - fixed) / flexible.max(1) as f32;

        let column_widths: Vec<Pt> = columns
            .iter()
            .map(|c| c.width.unwrap_or(flex_width))
            .collect();
        let column_origins: Vec<Pt> = column_widths
            .iter()
            .scan(x, |origin, &w| {
                let current = *origin;
                *origin += w;
                Some(current)
            })
            .collect();

        let header: Vec<String> = columns
            .iter()
            .map(|c| c.label.clone().unwrap_or_else(|| c.title.clone()))
            .collect();
        let rows: Vec<Vec<String>> = std::iter::once(header)
            .chain(items.iter().map(|item| {
                columns
                    .iter()
                    .map(|c| item.get(&c.title).cloned().unwrap_or_default())
                    .collect()
            }))
            .collect();

        let margins = options.margins;
        let heights: Vec<Pt> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(column_widths.iter())
                    .map(|(content, &w)| {
                        let (_, height) = canvas.text_size(content, w - margins * 2.0);
                        height + margins * 2.0
                    })
                    .fold(options.base_row_height, Pt::max)
            })
            .collect();

        Table {
            x,
            top,
            width,
            margins,
            header_gap: options.header_gap,
            show_header: true,
            vertical_align: false,
            column_widths,
            column_origins,
            rows,
            heights,
        }
    }

    pub fn show_header(&self) -> bool {
        self.show_header
    }

    /// Hide or show the header row; hiding it moves the content up
    pub fn set_show_header(&mut self, show_header: bool) {
        self.show_header = show_header;
    }

    /// Index of the first row that is laid out
    fn first_row(&self) -> usize {
        if self.show_header {
            0
        } else {
            1
        }
    }

    fn gap(&self) -> Pt {
        if self.show_header {
            self.header_gap
        } else {
            Pt(0.0)
        }
    }

    pub fn column_widths(&self) -> &[Pt] {
        &self.column_widths
    }

    /// Left edge of every column
    pub fn column_origins(&self) -> &[Pt] {
        &self.column_origins
    }

    /// Height of every visible row, top to bottom
    pub fn row_heights(&self) -> &[Pt] {
        &self.heights[self.first_row()..]
    }

    /// Bottom edge of every visible row, top to bottom
    pub fn row_origins(&self) -> Vec<Pt> {
        let gap = self.gap();
        let mut y = self.top;
        self.row_heights()
            .iter()
            .enumerate()
            .map(|(i, &height)| {
                if i == 1 {
                    y -= gap;
                }
                y -= height;
                y
            })
            .collect()
    }

    /// Text of every visible cell, row by row
    pub fn cell_values(&self) -> &[Vec<String>] {
        &self.rows[self.first_row()..]
    }

    /// Every visible cell, row by row
    pub fn cell_rects(&self) -> Vec<Vec<CellBox>> {
        self.row_origins()
            .into_iter()
            .zip(self.row_heights().iter())
            .map(|(y, &height)| {
                self.column_origins
                    .iter()
                    .zip(self.column_widths.iter())
                    .map(|(&x, &width)| CellBox {
                        rect: Rect::from_xywh(x, y, width, height),
                        margins: self.margins,
                    })
                    .collect()
            })
            .collect()
    }

    /// Total height of the laid out table
    pub fn height(&self) -> Pt {
        self.row_heights().iter().copied().sum::<Pt>() + self.gap()
    }

    pub fn bottom(&self) -> Pt {
        self.top - self.height()
    }

    pub fn table_rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.bottom(), self.width, self.height())
    }

    /// The header row, [None] when it is hidden
    pub fn header_rect(&self) -> Option<Rect> {
        self.show_header.then(|| {
            Rect::from_xywh(self.x, self.top - self.heights[0], self.width, self.heights[0])
        })
    }

    /// Every row below the header
    pub fn content_rect(&self) -> Rect {
        let height: Pt = self.heights[1..].iter().copied().sum();
        Rect::from_xywh(self.x, self.bottom(), self.width, height)
    }

    /// One rectangle per row below the header
    pub fn content_rects(&self) -> Vec<Rect> {
        let skip = if self.show_header { 1 } else { 0 };
        self.row_origins()
            .into_iter()
            .zip(self.row_heights().iter())
            .skip(skip)
            .map(|(y, &height)| Rect::from_xywh(self.x, y, self.width, height))
            .collect()
    }

    /// Draw the text of every cell
    pub fn draw_content<C: Canvas>(&self, canvas: &mut C) {
        for (contents, cells) in self.cell_values().iter().zip(self.cell_rects()) {
            for (content, cell) in contents.iter().zip(cells) {
                if self.vertical_align {
                    vertical_align_text_box(
                        canvas,
                        content,
                        cell.raw_text_box(),
                        TextBoxOptions::new().vertical_align(VerticalAlign::Center),
                    );
                } else {
                    canvas.text_box(content, cell.text_box(), HorizontalAlign::Left);
                }
            }
        }
    }

    /// Vertical lines between columns
    pub fn draw_columns_lines<C: Canvas>(&self, canvas: &mut C) {
        let (bottom, top) = (self.bottom(), self.top);
        for &x in self.column_origins.iter().skip(1) {
            canvas.line((x, bottom), (x, top));
        }
    }

    /// Horizontal lines between rows
    pub fn draw_rows_lines<C: Canvas>(&self, canvas: &mut C) {
        let right = self.x + self.width;
        let origins = self.row_origins();
        for &y in origins.iter().take(origins.len().saturating_sub(1)) {
            canvas.line((self.x, y), (right, y));
        }
    }

    pub fn draw_frame<C: Canvas>(&self, canvas: &mut C) {
        canvas.rect(self.table_rect());
    }

    /// The top and bottom edges
    pub fn draw_rows_frame<C: Canvas>(&self, canvas: &mut C) {
        let (bottom, right) = (self.bottom(), self.x + self.width);
        canvas.line((self.x, bottom), (right, bottom));
        canvas.line((self.x, self.top), (right, self.top));
    }

    /// The left and right edges
    pub fn draw_columns_frame<C: Canvas>(&self, canvas: &mut C) {
        let (bottom, right) = (self.bottom(), self.x + self.width);
        canvas.line((self.x, bottom), (self.x, self.top));
        canvas.line((right, bottom), (right, self.top));
    }

    pub fn draw_header_background<C: Canvas>(&self, canvas: &mut C) {
        if let Some(rect) = self.header_rect() {
            canvas.rect(rect);
        }
    }

    pub fn draw_content_background<C: Canvas>(&self, canvas: &mut C) {
        canvas.rect(self.content_rect());
    }
}

impl Guides for Table {
    fn draw_frame<C: Canvas>(&self, canvas: &mut C) {
        Table::draw_frame(self, canvas);
        self.draw_rows_lines(canvas);
        self.draw_columns_lines(canvas);
    }

    fn draw_indexes<C: Canvas>(&self, canvas: &mut C) {
        for (r, row) in self.cell_rects().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let rect = cell.rect();
                canvas.text(&format!("({c}, {r})"), (rect.x1 + Pt(2.0), rect.y1 + Pt(2.0)));
            }
        }
    }
}
