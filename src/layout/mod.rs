//! Layout helpers built on the grids: text boxes aligned to baseline grids,
//! text poured through columns, images fitted into boxes and tables.
//!
//! Every helper draws through a [`Canvas`](crate::Canvas) and returns what it
//! computed: the overflowing text for text boxes, the placement of images.
//!
//! # Example
//!
//! ```
//! use pdf_grid::layout::{baseline_grid_text_box, Margins, TextBoxOptions, VerticalAlign};
//! use pdf_grid::pdf::{FontMetrics, PdfCanvas};
//! use pdf_grid::{pagesize, Area, BaselineGrid, Pt};
//!
//! struct Mono;
//!
//! impl FontMetrics for Mono {
//!     fn ascent(&self, size: Pt) -> Pt { size * 0.75 }
//!     fn descent(&self, size: Pt) -> Pt { -(size * 0.25) }
//!     fn leading(&self, _size: Pt) -> Pt { Pt(0.0) }
//!     fn cap_height(&self, size: Pt) -> Pt { size * 0.75 }
//!     fn advance(&self, _ch: char, size: Pt) -> Pt { size * 0.5 }
//!     fn glyph_id(&self, ch: char) -> Option<u16> { u16::try_from(u32::from(ch)).ok() }
//! }
//!
//! let mut canvas = PdfCanvas::new(pagesize::A4);
//! let font = canvas.add_font(Mono);
//! canvas.set_font(font);
//!
//! let area = Area::from_margins(Margins::inset(Pt(50.0)), pagesize::A4);
//! let baselines = BaselineGrid::new(area, Pt(12.0));
//!
//! let overflow = baseline_grid_text_box(
//!     &mut canvas,
//!     "Hello, world!",
//!     area.rect(),
//!     &baselines,
//!     TextBoxOptions::new().vertical_align(VerticalAlign::Top),
//! );
//! assert!(overflow.is_empty());
//! ```

mod image;
mod margins;
mod table;
mod text;

pub use self::image::*;
pub use margins::*;
pub use table::*;
pub use text::*;
