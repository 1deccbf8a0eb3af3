//! The drawing surface every grid, table and text flow draws onto.
//!
//! The layout helpers in this crate only compute coordinates. Whenever they
//! need to draw, measure text or ask about the page, they go through a
//! [`Canvas`]. [`PdfCanvas`](crate::pdf::PdfCanvas) is the implementation
//! shipped with the crate; anything that can draw rectangles, lines and
//! wrapped text can implement the trait.

use crate::colour::Colour;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use crate::GridError;
use std::str::FromStr;

/// Horizontal alignment of the lines of a text box
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl FromStr for HorizontalAlign {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(HorizontalAlign::Left),
            "right" => Ok(HorizontalAlign::Right),
            "center" => Ok(HorizontalAlign::Center),
            _ => Err(GridError::InvalidHorizontalAlign(s.to_string())),
        }
    }
}

/// Intrinsic size of an image
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageInfo {
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Pixels per inch
    pub resolution: f32,
}

impl ImageInfo {
    /// Size of the image in points when drawn at its own resolution
    pub fn size(&self) -> (Pt, Pt) {
        let scaling = 72.0 / self.resolution;
        (
            Pt(self.pixel_width as f32 * scaling),
            Pt(self.pixel_height as f32 * scaling),
        )
    }
}

/// A page being drawn on.
///
/// Coordinates follow PDF conventions: the origin is the lower left corner of
/// the page and y grows upward. Rectangles handed to text methods may be
/// flipped; implementations normalize them.
///
/// Graphics state (colours, stroke width, font size and line height) is
/// scoped by [`save_state`](Canvas::save_state) and
/// [`restore_state`](Canvas::restore_state), which must be balanced.
pub trait Canvas {
    /// An image that was loaded for, or registered with, this canvas
    type Image;

    fn page_size(&self) -> PageSize;

    fn save_state(&mut self);
    fn restore_state(&mut self);

    /// Colour used to fill shapes and text; [None] disables filling
    fn set_fill(&mut self, colour: Option<Colour>);
    /// Colour used to stroke shapes; [None] disables stroking
    fn set_stroke(&mut self, colour: Option<Colour>);
    fn set_stroke_width(&mut self, width: Pt);
    fn set_font_size(&mut self, size: Pt);

    fn rect(&mut self, rect: Rect);
    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt));
    /// A cubic bezier from `from` to `to`
    fn curve(&mut self, from: (Pt, Pt), ctrl1: (Pt, Pt), ctrl2: (Pt, Pt), to: (Pt, Pt));
    fn oval(&mut self, rect: Rect);
    /// Restrict everything drawn until the next `restore_state` to `rect`
    fn clip(&mut self, rect: Rect);

    /// Draw a single line of text with its baseline starting at `at`
    fn text(&mut self, text: &str, at: (Pt, Pt));

    /// Wrap `text` into `rect` and draw it. Returns the text that did not fit.
    fn text_box(&mut self, text: &str, rect: Rect, align: HorizontalAlign) -> String;

    /// Same as [`text_box`](Canvas::text_box), without drawing anything
    fn text_overflow(&mut self, text: &str, rect: Rect, align: HorizontalAlign) -> String;

    /// The start of the baseline of every line that
    /// [`text_box`](Canvas::text_box) would draw, top line first
    fn text_box_baselines(&mut self, text: &str, rect: Rect) -> Vec<(Pt, Pt)>;

    /// Width and height of `text` once wrapped to `width`
    fn text_size(&mut self, text: &str, width: Pt) -> (Pt, Pt);

    /// Height of capital letters above the baseline, for the current font and size
    fn cap_height(&self) -> Pt;

    /// Natural distance between baselines for the current font and size,
    /// ignoring any line height that was set
    fn font_line_height(&self) -> Pt;

    /// Distance between baselines used for the next text boxes
    fn set_line_height(&mut self, line_height: Pt);

    fn image_info(&self, image: &Self::Image) -> ImageInfo;

    /// Draw an image stretched into `rect`
    fn image(&mut self, image: &Self::Image, rect: Rect);
}
