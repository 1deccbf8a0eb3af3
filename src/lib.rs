//! Column, row and baseline grids for laying out pages.
//!
//! Grids turn layout parameters (subdivisions, gutters, margins, baseline
//! spacing) into coordinates; the [`layout`] helpers use those coordinates to
//! place text, images and tables on a [`Canvas`]. [`pdf::PdfCanvas`] records
//! everything into a PDF content stream.
//!
//! ```
//! use pdf_grid::layout::Margins;
//! use pdf_grid::{pagesize, Area, ColumnGrid, Grid, Pt};
//!
//! let area = Area::from_margins(Margins::inset(Pt(50.0)), pagesize::A4);
//! let columns = ColumnGrid::new(area, 4, Pt(10.0));
//!
//! // the second column, spanning two columns and the gutter between them
//! let (x, width) = (columns.slot(1), &columns * 2.0);
//! assert_eq!(x, columns.left() + columns.column_width() + Pt(10.0));
//! assert_eq!(width, columns.column_width() * 2.0 + Pt(10.0));
//!
//! let grid = Grid::default_for(area);
//! assert_eq!(grid.len(), 64);
//! ```

mod area;
pub use area::*;

mod axis;
pub use axis::*;

mod baseline;
pub use baseline::*;

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod grid;
pub use grid::*;

mod guides;
pub use guides::*;

/// Text flow, image fitting and tables, drawn through a [`Canvas`]
pub mod layout;

pub mod pagesize;

/// A [`Canvas`] backed by a PDF content stream
pub mod pdf;

mod rect;
pub use rect::*;

mod slice;
pub use slice::*;

mod units;
pub use units::*;

#[cfg(test)]
pub(crate) mod testing;

/// Re-export PDF-writer functionality, mostly for embedding the content
/// streams produced by [`pdf::PdfCanvas`]
pub use pdf_writer;
