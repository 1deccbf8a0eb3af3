//! A [`Canvas`] that records into a PDF content stream.
//!
//! [`PdfCanvas`] writes every drawing operation into a
//! [`pdf_writer::Content`] and measures text with [`FontMetrics`]. Fonts and
//! images are registered with the canvas and referred to in the stream as
//! `/F{index}` and `/I{index}`, the indices being those of the returned
//! [`Id`]s. Turning the finished stream into a page (resources, embedded
//! fonts, image XObjects) is up to the caller.
//!
//! ```no_run
//! use pdf_grid::pdf::{Font, PdfCanvas};
//! use pdf_grid::{pagesize, Canvas, HorizontalAlign, Pt, Rect};
//!
//! let mut canvas = PdfCanvas::new(pagesize::A4);
//! let font = canvas.add_font(Font::load_file("FiraMono-Regular.ttf").expect("can load font"));
//! canvas.set_font(font);
//! canvas.set_font_size(Pt(12.0));
//!
//! let rect = Rect::from_xywh(Pt(72.0), Pt(72.0), Pt(200.0), Pt(400.0));
//! let overflow = canvas.text_box("Hello, world!", rect, HorizontalAlign::Left);
//! assert!(overflow.is_empty());
//!
//! let content: Vec<u8> = canvas.finish();
//! ```

mod font;
mod image;
mod typeset;

pub use self::image::*;
pub use font::*;
pub use typeset::*;

use crate::canvas::{Canvas, HorizontalAlign, ImageInfo};
use crate::colour::{colours, Colour};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Content, Name, Str};

/// Magic number to approximate a quarter circle with a cubic bezier
const KAPPA: f32 = 0.552_284_8;

/// Size of text when nothing else was set
pub const DEFAULT_FONT_SIZE: Pt = Pt(10.0);

struct GraphicsState<F> {
    fill: Option<Colour>,
    stroke: Option<Colour>,
    stroke_width: Pt,
    font: Option<Id<F>>,
    font_size: Pt,
    line_height: Option<Pt>,
}

// Id<F> is Copy for every F, deriving would require F: Clone
impl<F> Clone for GraphicsState<F> {
    fn clone(&self) -> Self {
        GraphicsState {
            fill: self.fill,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
            font: self.font,
            font_size: self.font_size,
            line_height: self.line_height,
        }
    }
}

impl<F> Default for GraphicsState<F> {
    fn default() -> Self {
        GraphicsState {
            fill: Some(colours::BLACK),
            stroke: None,
            stroke_width: Pt(1.0),
            font: None,
            font_size: DEFAULT_FONT_SIZE,
            line_height: None,
        }
    }
}

/// A line of a text box, positioned on the page
struct PlacedLine {
    line: Line,
    baseline: (Pt, Pt),
}

/// Result of laying text out in a box
struct TextLayout {
    lines: Vec<PlacedLine>,
    /// Byte index of the first character that didn't fit
    overflow: usize,
}

/// A single page worth of drawing operations
pub struct PdfCanvas<F: FontMetrics = Font> {
    page_size: PageSize,
    content: Content,
    fonts: Arena<F>,
    images: Arena<Image>,
    state: GraphicsState<F>,
    saved: Vec<GraphicsState<F>>,
}

impl<F: FontMetrics> PdfCanvas<F> {
    pub fn new(page_size: PageSize) -> PdfCanvas<F> {
        PdfCanvas {
            page_size,
            content: Content::new(),
            fonts: Arena::new(),
            images: Arena::new(),
            state: GraphicsState::default(),
            saved: Vec::default(),
        }
    }

    /// Register a font, returning the id used to select it
    pub fn add_font(&mut self, font: F) -> Id<F> {
        self.fonts.alloc(font)
    }

    /// Register an image, returning the id used to draw it
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Select the font used by every text operation that follows
    pub fn set_font(&mut self, font: Id<F>) {
        self.state.font = Some(font);
    }

    pub fn fonts(&self) -> &Arena<F> {
        &self.fonts
    }

    pub fn images(&self) -> &Arena<Image> {
        &self.images
    }

    /// Finish recording and return the encoded content stream
    pub fn finish(self) -> Vec<u8> {
        if !self.saved.is_empty() {
            log::warn!("{} graphics states were never restored", self.saved.len());
        }
        self.content.finish()
    }

    fn font(&self) -> Option<&F> {
        self.state.font.and_then(|id| self.fonts.get(id))
    }

    fn line_step(&self, font: &F) -> Pt {
        self.state
            .line_height
            .unwrap_or_else(|| font.line_height(self.state.font_size))
    }

    /// Paint the current path with whatever fill and stroke are enabled
    fn paint(&mut self) {
        match (self.state.fill.is_some(), self.state.stroke.is_some()) {
            (true, true) => self.content.fill_nonzero_and_stroke(),
            (true, false) => self.content.fill_nonzero(),
            (false, true) => self.content.stroke(),
            (false, false) => self.content.end_path(),
        };
    }

    fn layout(&self, text: &str, rect: Rect, align: HorizontalAlign) -> TextLayout {
        let Some(font) = self.font() else {
            if !text.is_empty() {
                log::warn!("no font selected, {} bytes of text overflow", text.len());
            }
            return TextLayout {
                lines: Vec::default(),
                overflow: 0,
            };
        };

        let rect = rect.normalized();
        let size = self.state.font_size;
        let ascent = font.ascent(size);
        let descent = font.descent(size);
        let step = self.line_step(font);

        let lines = wrap(text, rect.width(), |ch| font.advance(ch, size));

        let mut placed: Vec<PlacedLine> = Vec::with_capacity(lines.len());
        let mut overflow = text.len();
        for (i, line) in lines.into_iter().enumerate() {
            let y = rect.y2 - ascent - step * i as f32;
            if y + descent < rect.y1 {
                overflow = line.range.start;
                break;
            }

            let x = match align {
                HorizontalAlign::Left => rect.x1,
                HorizontalAlign::Right => rect.x2 - line.width,
                HorizontalAlign::Center => rect.x1 + (rect.width() - line.width) / 2.0,
            };
            placed.push(PlacedLine {
                line,
                baseline: (x, y),
            });
        }

        TextLayout {
            lines: placed,
            overflow,
        }
    }

    /// Show `text` with its baseline starting at `at`, assumes a font is set
    fn show_line(&mut self, font_id: Id<F>, text: &str, at: (Pt, Pt)) {
        let Some(font) = self.fonts.get(font_id) else {
            return;
        };
        let space = font.glyph_id(' ').unwrap_or_default();

        let mut glyphs: Vec<u8> = Vec::with_capacity(text.len() * 2);
        for ch in text.chars() {
            if ch == '\t' {
                for _ in 0..TABSIZE {
                    glyphs.extend_from_slice(&space.to_be_bytes());
                }
                continue;
            }
            let gid = font
                .glyph_id(ch)
                .or_else(|| font.glyph_id('\u{FFFD}'))
                .or_else(|| font.glyph_id('?'))
                .unwrap_or_default();
            glyphs.extend_from_slice(&gid.to_be_bytes());
        }

        let name = format!("F{}", font_id.index());
        self.content.begin_text();
        self.content
            .set_font(Name(name.as_bytes()), self.state.font_size.0);
        self.content.next_line(at.0 .0, at.1 .0);
        self.content.show(Str(&glyphs));
        self.content.end_text();
    }
}

fn set_colour(content: &mut Content, colour: Colour, fill: bool) {
    match (colour, fill) {
        (Colour::RGB { r, g, b }, true) => content.set_fill_rgb(r, g, b),
        (Colour::RGB { r, g, b }, false) => content.set_stroke_rgb(r, g, b),
        (Colour::CMYK { c, m, y, k }, true) => content.set_fill_cmyk(c, m, y, k),
        (Colour::CMYK { c, m, y, k }, false) => content.set_stroke_cmyk(c, m, y, k),
        (Colour::Grey { g }, true) => content.set_fill_gray(g),
        (Colour::Grey { g }, false) => content.set_stroke_gray(g),
    };
}

impl<F: FontMetrics> Canvas for PdfCanvas<F> {
    type Image = Id<Image>;

    fn page_size(&self) -> PageSize {
        self.page_size
    }

    fn save_state(&mut self) {
        self.saved.push(self.state.clone());
        self.content.save_state();
    }

    fn restore_state(&mut self) {
        match self.saved.pop() {
            Some(state) => {
                self.state = state;
                self.content.restore_state();
            }
            None => log::warn!("restore_state without a matching save_state"),
        }
    }

    fn set_fill(&mut self, colour: Option<Colour>) {
        if let Some(colour) = colour {
            set_colour(&mut self.content, colour, true);
        }
        self.state.fill = colour;
    }

    fn set_stroke(&mut self, colour: Option<Colour>) {
        if let Some(colour) = colour {
            set_colour(&mut self.content, colour, false);
        }
        self.state.stroke = colour;
    }

    fn set_stroke_width(&mut self, width: Pt) {
        self.content.set_line_width(width.0);
        self.state.stroke_width = width;
    }

    fn set_font_size(&mut self, size: Pt) {
        self.state.font_size = size;
    }

    fn rect(&mut self, rect: Rect) {
        self.content
            .rect(rect.x1.0, rect.y1.0, rect.width().0, rect.height().0);
        self.paint();
    }

    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt)) {
        self.content.move_to(from.0 .0, from.1 .0);
        self.content.line_to(to.0 .0, to.1 .0);
        // a line has no inside to fill
        if self.state.stroke.is_some() {
            self.content.stroke();
        } else {
            self.content.end_path();
        }
    }

    fn curve(&mut self, from: (Pt, Pt), ctrl1: (Pt, Pt), ctrl2: (Pt, Pt), to: (Pt, Pt)) {
        self.content.move_to(from.0 .0, from.1 .0);
        self.content
            .cubic_to(ctrl1.0 .0, ctrl1.1 .0, ctrl2.0 .0, ctrl2.1 .0, to.0 .0, to.1 .0);
        self.paint();
    }

    fn oval(&mut self, rect: Rect) {
        let rect = rect.normalized();
        let (rx, ry) = (rect.width().0 / 2.0, rect.height().0 / 2.0);
        let (cx, cy) = (rect.x1.0 + rx, rect.y1.0 + ry);
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        self.content.move_to(cx + rx, cy);
        self.content
            .cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
        self.content
            .cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
        self.content
            .cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
        self.content
            .cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
        self.content.close_path();
        self.paint();
    }

    fn clip(&mut self, rect: Rect) {
        self.content
            .rect(rect.x1.0, rect.y1.0, rect.width().0, rect.height().0);
        self.content.clip_nonzero();
        self.content.end_path();
    }

    fn text(&mut self, text: &str, at: (Pt, Pt)) {
        let Some(font_id) = self.state.font else {
            log::warn!("no font selected, dropping text {text:?}");
            return;
        };
        if self.state.fill.is_none() {
            return;
        }
        self.show_line(font_id, text, at);
    }

    fn text_box(&mut self, text: &str, rect: Rect, align: HorizontalAlign) -> String {
        let layout = self.layout(text, rect, align);

        if let (Some(font_id), true) = (self.state.font, self.state.fill.is_some()) {
            for placed in layout.lines.iter() {
                let line = text[placed.line.range.clone()].trim_end();
                if !line.is_empty() {
                    self.show_line(font_id, line, placed.baseline);
                }
            }
        }

        text[layout.overflow..].to_string()
    }

    fn text_overflow(&mut self, text: &str, rect: Rect, align: HorizontalAlign) -> String {
        let layout = self.layout(text, rect, align);
        text[layout.overflow..].to_string()
    }

    fn text_box_baselines(&mut self, text: &str, rect: Rect) -> Vec<(Pt, Pt)> {
        self.layout(text, rect, HorizontalAlign::Left)
            .lines
            .into_iter()
            .map(|placed| placed.baseline)
            .collect()
    }

    fn text_size(&mut self, text: &str, width: Pt) -> (Pt, Pt) {
        let Some(font) = self.font() else {
            return (Pt(0.0), Pt(0.0));
        };
        let size = self.state.font_size;

        let lines = wrap(text, width, |ch| font.advance(ch, size));
        if lines.is_empty() {
            return (Pt(0.0), Pt(0.0));
        }

        let widest = lines
            .iter()
            .map(|line| line.width)
            .fold(Pt(0.0), Pt::max);
        let height = font.ascent(size) - font.descent(size)
            + self.line_step(font) * (lines.len() - 1) as f32;
        (widest, height)
    }

    fn cap_height(&self) -> Pt {
        self.font()
            .map(|font| font.cap_height(self.state.font_size))
            .unwrap_or_default()
    }

    fn font_line_height(&self) -> Pt {
        self.font()
            .map(|font| font.line_height(self.state.font_size))
            .unwrap_or_default()
    }

    fn set_line_height(&mut self, line_height: Pt) {
        self.state.line_height = Some(line_height);
    }

    fn image_info(&self, image: &Id<Image>) -> ImageInfo {
        match self.images.get(*image) {
            Some(image) => image.info(),
            None => ImageInfo {
                pixel_width: 0,
                pixel_height: 0,
                resolution: DEFAULT_RESOLUTION,
            },
        }
    }

    fn image(&mut self, image: &Id<Image>, rect: Rect) {
        let name = format!("I{}", image.index());
        self.content.save_state();
        self.content.transform([
            rect.width().0,
            0.0,
            0.0,
            rect.height().0,
            rect.x1.0,
            rect.y1.0,
        ]);
        self.content.x_object(Name(name.as_bytes()));
        self.content.restore_state();
    }
}
